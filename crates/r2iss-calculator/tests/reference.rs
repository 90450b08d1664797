use r2iss_calculator::cytogenetics::{DEL17P_POINTS, GAIN1Q_POINTS, T414_POINTS};
use r2iss_calculator::iss::iss_points;
use r2iss_calculator::ldh::ldh_points;
use r2iss_calculator::reference::{point_table, stage_table, MAX_TOTAL_POINTS, POINT_STEP};
use r2iss_calculator::stage::risk_stage;
use r2iss_core::models::inputs::LdhBand;
use r2iss_core::models::stage::{IssStage, RiskStage};

#[test]
fn point_table_lists_every_factor() {
    let rows = point_table();
    let factors: Vec<&str> = rows.iter().map(|r| r.factor.as_str()).collect();
    assert_eq!(
        factors,
        [
            "ISS Stage I",
            "ISS Stage II",
            "ISS Stage III",
            "LDH",
            "LDH",
            "del(17p)",
            "t(4;14)",
            "1q gain/amp",
        ]
    );

    let points: Vec<f64> = rows.iter().map(|r| r.points).collect();
    assert_eq!(points, [0.0, 1.0, 1.5, 0.0, 1.0, 1.0, 1.0, 0.5]);
}

#[test]
fn stage_table_ranges_are_contiguous() {
    let rows = stage_table();
    let stages: Vec<RiskStage> = rows.iter().map(|r| r.stage).collect();
    assert_eq!(stages, RiskStage::ALL.to_vec());

    assert_eq!(rows[0].min_points, 0.0);
    assert_eq!(rows[3].max_points, MAX_TOTAL_POINTS);
    for pair in rows.windows(2) {
        assert_eq!(pair[1].min_points, pair[0].max_points + POINT_STEP);
    }

    let ranges: Vec<(f64, f64)> = rows.iter().map(|r| (r.min_points, r.max_points)).collect();
    assert_eq!(ranges, [(0.0, 0.0), (0.5, 1.0), (1.5, 2.5), (3.0, 5.0)]);
}

#[test]
fn stage_table_agrees_with_risk_stage() {
    for row in stage_table() {
        assert_eq!(risk_stage(row.min_points), row.stage);
        assert_eq!(risk_stage(row.max_points), row.stage);
        assert_eq!(row.risk, row.stage.risk());
    }
}

#[test]
fn totals_between_half_points_still_map_to_a_stage() {
    assert_eq!(risk_stage(0.25), RiskStage::II);
    assert_eq!(risk_stage(1.25), RiskStage::III);
    assert_eq!(risk_stage(2.75), RiskStage::IV);
}

#[test]
fn point_table_matches_scoring_rules() {
    let points: Vec<f64> = point_table().iter().map(|r| r.points).collect();
    assert_eq!(
        points,
        [
            iss_points(IssStage::I),
            iss_points(IssStage::II),
            iss_points(IssStage::III),
            ldh_points(LdhBand::Normal),
            ldh_points(LdhBand::Elevated),
            DEL17P_POINTS,
            T414_POINTS,
            GAIN1Q_POINTS,
        ]
    );
    assert_eq!(ldh_points(LdhBand::SignificantlyElevated), ldh_points(LdhBand::Elevated));
}

#[test]
fn max_total_is_the_sum_of_the_highest_contributions() {
    let max = iss_points(IssStage::III)
        + ldh_points(LdhBand::Elevated)
        + DEL17P_POINTS
        + T414_POINTS
        + GAIN1Q_POINTS;
    assert_eq!(max, MAX_TOTAL_POINTS);
}
