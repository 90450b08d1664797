use r2iss_core::models::inputs::{AlbuminBand, B2mBand};
use r2iss_core::models::stage::IssStage;

/// ISS stage from β2M and albumin.
///
/// Stage I needs both β2M < 3.5 and albumin ≥ 3.5. β2M ≥ 5.5 is stage III
/// whatever the albumin. Everything else is stage II.
pub fn iss_stage(b2m: B2mBand, albumin: AlbuminBand) -> IssStage {
    match (b2m, albumin) {
        (B2mBand::Below3_5, AlbuminBand::AtLeast3_5) => IssStage::I,
        (B2mBand::AtLeast5_5, _) => IssStage::III,
        _ => IssStage::II,
    }
}

/// R2-ISS points contributed by an ISS stage.
pub fn iss_points(stage: IssStage) -> f64 {
    match stage {
        IssStage::I => 0.0,
        IssStage::II => 1.0,
        IssStage::III => 1.5,
    }
}
