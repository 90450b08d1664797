//! Reference guide data: what each factor is worth and how totals map to stages.

use serde::Serialize;
use ts_rs::TS;

use r2iss_core::models::inputs::LdhBand;
use r2iss_core::models::stage::{IssStage, RiskStage};

use crate::cytogenetics::{DEL17P_POINTS, GAIN1Q_POINTS, T414_POINTS};
use crate::iss::iss_points;
use crate::ldh::ldh_points;
use crate::stage::STAGE_UPPER_BOUNDS;

/// Granularity of every sub-score, and so of every total.
pub const POINT_STEP: f64 = 0.5;

/// Highest reachable total: ISS III + elevated LDH + all three abnormalities.
pub const MAX_TOTAL_POINTS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct PointRow {
    pub factor: String,
    pub condition: String,
    pub points: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct StageRow {
    pub stage: RiskStage,
    pub risk: String,
    pub min_points: f64,
    pub max_points: f64,
}

fn row(factor: &str, condition: &str, points: f64) -> PointRow {
    PointRow {
        factor: factor.to_string(),
        condition: condition.to_string(),
        points,
    }
}

/// Every scoring factor with its qualifying condition.
pub fn point_table() -> Vec<PointRow> {
    vec![
        row(
            "ISS Stage I",
            "β2M < 3.5 mg/L and Albumin ≥ 3.5 g/dL",
            iss_points(IssStage::I),
        ),
        row(
            "ISS Stage II",
            "Neither stage I nor stage III",
            iss_points(IssStage::II),
        ),
        row("ISS Stage III", "β2M ≥ 5.5 mg/L", iss_points(IssStage::III)),
        row("LDH", "Normal (< 240 U/L)", ldh_points(LdhBand::Normal)),
        row("LDH", "Elevated (≥ 240 U/L)", ldh_points(LdhBand::Elevated)),
        row("del(17p)", "Present", DEL17P_POINTS),
        row("t(4;14)", "Present", T414_POINTS),
        row("1q gain/amp", "Present", GAIN1Q_POINTS),
    ]
}

/// The four R2-ISS stages with their inclusive point ranges.
pub fn stage_table() -> Vec<StageRow> {
    let mut rows = Vec::with_capacity(RiskStage::ALL.len());
    let mut min_points = 0.0;
    for (stage, upper) in STAGE_UPPER_BOUNDS {
        rows.push(StageRow {
            stage,
            risk: stage.risk().to_string(),
            min_points,
            max_points: upper,
        });
        min_points = upper + POINT_STEP;
    }
    rows.push(StageRow {
        stage: RiskStage::IV,
        risk: RiskStage::IV.risk().to_string(),
        min_points,
        max_points: MAX_TOTAL_POINTS,
    });
    rows
}
