//! r2iss-calculator
//!
//! R2-ISS staging rules for multiple myeloma. Pure functions — no I/O and
//! no shared state, safe to call from any thread.
//!
//! The total score is the sum of three parts:
//! - ISS stage from β2M and albumin (0, 1 or 1.5 points)
//! - LDH above normal (1 point)
//! - high-risk cytogenetics: del(17p) and t(4;14) at 1 point each, 1q gain at 0.5
//!
//! and is mapped onto one of four R2-ISS stages.

pub mod breakdown;
pub mod cytogenetics;
pub mod error;
pub mod iss;
pub mod ldh;
pub mod reference;
pub mod stage;

use r2iss_core::models::category::Category;
use r2iss_core::models::inputs::{AlbuminBand, B2mBand, ClinicalInputs, CytogeneticFlags, LdhBand};
use r2iss_core::models::result::ScoreResult;

use error::CalculatorError;

/// Compute the R2-ISS stage and its breakdown.
pub fn score(inputs: &ClinicalInputs) -> ScoreResult {
    let iss_stage = iss::iss_stage(inputs.b2m, inputs.albumin);
    let iss_points = iss::iss_points(iss_stage);
    let ldh_points = ldh::ldh_points(inputs.ldh);
    let cytogenetic_points = cytogenetics::cytogenetic_points(inputs.cytogenetics);
    let total_points = iss_points + ldh_points + cytogenetic_points;
    let r2_iss_stage = stage::risk_stage(total_points);

    tracing::debug!(
        iss_stage = %iss_stage,
        total_points,
        r2_iss_stage = r2_iss_stage.short_label(),
        "r2iss scored"
    );

    ScoreResult {
        iss_stage,
        iss_points,
        ldh_points,
        cytogenetic_points,
        total_points,
        r2_iss_stage,
        breakdown_messages: breakdown::breakdown_messages(
            iss_stage,
            inputs.ldh,
            inputs.cytogenetics,
        ),
    }
}

/// Score from raw category labels (display labels or codes).
///
/// Unrecognized labels are rejected rather than falling through to a
/// default band.
pub fn score_labels(
    b2m: &str,
    albumin: &str,
    ldh: &str,
    del17p: bool,
    t414: bool,
    gain1q: bool,
) -> Result<ScoreResult, CalculatorError> {
    let inputs = ClinicalInputs {
        b2m: b2m.parse()?,
        albumin: albumin.parse()?,
        ldh: ldh.parse()?,
        cytogenetics: CytogeneticFlags {
            del17p,
            t414,
            gain1q,
        },
    };
    Ok(score(&inputs))
}

/// Every valid input combination (3 × 2 × 3 × 2 × 2 × 2 = 144).
pub fn all_inputs() -> Vec<ClinicalInputs> {
    let mut all = Vec::with_capacity(144);
    for &b2m in B2mBand::all() {
        for &albumin in AlbuminBand::all() {
            for &ldh in LdhBand::all() {
                for bits in 0u8..8 {
                    all.push(ClinicalInputs {
                        b2m,
                        albumin,
                        ldh,
                        cytogenetics: CytogeneticFlags {
                            del17p: bits & 0b001 != 0,
                            t414: bits & 0b010 != 0,
                            gain1q: bits & 0b100 != 0,
                        },
                    });
                }
            }
        }
    }
    all
}
