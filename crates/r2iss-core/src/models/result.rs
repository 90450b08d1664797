use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::stage::{IssStage, RiskStage};

/// Outcome of one R2-ISS calculation.
///
/// All point values are multiples of 0.5. `breakdown_messages` holds one
/// line per contributing factor: ISS stage, LDH, then each present
/// cytogenetic abnormality (del(17p), t(4;14), 1q gain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub iss_stage: IssStage,
    pub iss_points: f64,
    pub ldh_points: f64,
    pub cytogenetic_points: f64,
    pub total_points: f64,
    pub r2_iss_stage: RiskStage,
    pub breakdown_messages: Vec<String>,
}
