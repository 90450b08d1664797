use r2iss_core::models::stage::RiskStage;

/// Upper bound (inclusive) of each stage's point band, lowest stage first.
/// `IV` takes everything above the last bound.
pub const STAGE_UPPER_BOUNDS: [(RiskStage, f64); 3] = [
    (RiskStage::I, 0.0),
    (RiskStage::II, 1.0),
    (RiskStage::III, 2.5),
];

/// Map a total point score to its R2-ISS stage.
///
/// Bands are contiguous, so every total maps to exactly one stage:
/// `0` → I, `0.5..=1` → II, `1.5..=2.5` → III, `3+` → IV.
pub fn risk_stage(total_points: f64) -> RiskStage {
    STAGE_UPPER_BOUNDS
        .iter()
        .find(|(_, upper)| total_points <= *upper)
        .map(|(stage, _)| *stage)
        .unwrap_or(RiskStage::IV)
}
