use r2iss_core::models::inputs::LdhBand;

/// Any LDH above the normal band adds one point; both elevated bands score the same.
pub fn ldh_points(ldh: LdhBand) -> f64 {
    if ldh.is_elevated() { 1.0 } else { 0.0 }
}
