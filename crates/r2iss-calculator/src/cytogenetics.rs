use r2iss_core::models::inputs::CytogeneticFlags;

pub const DEL17P_POINTS: f64 = 1.0;
pub const T414_POINTS: f64 = 1.0;
pub const GAIN1Q_POINTS: f64 = 0.5;

/// Sum of the high-risk cytogenetic contributions. Additive, uncapped.
pub fn cytogenetic_points(flags: CytogeneticFlags) -> f64 {
    let mut points = 0.0;
    if flags.del17p {
        points += DEL17P_POINTS;
    }
    if flags.t414 {
        points += T414_POINTS;
    }
    if flags.gain1q {
        points += GAIN1Q_POINTS;
    }
    points
}
