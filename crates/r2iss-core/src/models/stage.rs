use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Classic International Staging System stage (β2M and albumin only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum IssStage {
    I,
    II,
    III,
}

impl IssStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
        }
    }
}

impl fmt::Display for IssStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Revised R2-ISS risk stage, derived from the total point score.
///
/// Serialized as the full display label, e.g. `"R2-ISS II (Low-Intermediate Risk)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RiskStage {
    #[serde(rename = "R2-ISS I (Low Risk)")]
    I,
    #[serde(rename = "R2-ISS II (Low-Intermediate Risk)")]
    II,
    #[serde(rename = "R2-ISS III (Intermediate-High Risk)")]
    III,
    #[serde(rename = "R2-ISS IV (High Risk)")]
    IV,
}

impl RiskStage {
    pub const ALL: [RiskStage; 4] = [Self::I, Self::II, Self::III, Self::IV];

    /// Full label, e.g. "R2-ISS IV (High Risk)".
    pub fn label(self) -> &'static str {
        match self {
            Self::I => "R2-ISS I (Low Risk)",
            Self::II => "R2-ISS II (Low-Intermediate Risk)",
            Self::III => "R2-ISS III (Intermediate-High Risk)",
            Self::IV => "R2-ISS IV (High Risk)",
        }
    }

    /// Stage name without the risk group, e.g. "R2-ISS IV".
    /// Presentation layers key their stage colors on this.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::I => "R2-ISS I",
            Self::II => "R2-ISS II",
            Self::III => "R2-ISS III",
            Self::IV => "R2-ISS IV",
        }
    }

    pub fn risk(self) -> &'static str {
        match self {
            Self::I => "Low Risk",
            Self::II => "Low-Intermediate Risk",
            Self::III => "Intermediate-High Risk",
            Self::IV => "High Risk",
        }
    }
}

impl fmt::Display for RiskStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
