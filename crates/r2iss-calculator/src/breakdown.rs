use r2iss_core::models::inputs::{CytogeneticFlags, LdhBand};
use r2iss_core::models::stage::IssStage;

/// Explanation lines for a calculation, in display order: ISS stage, LDH,
/// then each present abnormality as del(17p), t(4;14), 1q gain.
pub fn breakdown_messages(
    iss_stage: IssStage,
    ldh: LdhBand,
    flags: CytogeneticFlags,
) -> Vec<String> {
    let mut messages = Vec::with_capacity(5);

    messages.push(
        match iss_stage {
            IssStage::I => "ISS Stage I: 0 points (β2M < 3.5 mg/L and Albumin ≥ 3.5 g/dL)",
            IssStage::II => {
                "ISS Stage II: 1 point (β2M between 3.5 and 5.5 mg/L or Albumin < 3.5 g/dL)"
            }
            IssStage::III => "ISS Stage III: 1.5 points (β2M ≥ 5.5 mg/L)",
        }
        .to_string(),
    );

    messages.push(
        if ldh.is_elevated() {
            "LDH Elevated: Added 1 point"
        } else {
            "LDH Normal: 0 points"
        }
        .to_string(),
    );

    if flags.del17p {
        messages.push("High-risk cytogenetics - del(17p): Added 1 point".to_string());
    }
    if flags.t414 {
        messages.push("High-risk cytogenetics - t(4;14): Added 1 point".to_string());
    }
    if flags.gain1q {
        messages.push("High-risk cytogenetics - 1q gain: Added 0.5 points".to_string());
    }

    messages
}
