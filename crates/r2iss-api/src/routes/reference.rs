use axum::Json;
use serde::Serialize;

use r2iss_calculator::reference::{point_table, stage_table, PointRow, StageRow};

#[derive(Serialize)]
pub struct ReferenceGuide {
    points: Vec<PointRow>,
    stages: Vec<StageRow>,
}

/// Points per factor and the point range of each stage.
pub async fn reference_guide() -> Json<ReferenceGuide> {
    Json(ReferenceGuide {
        points: point_table(),
        stages: stage_table(),
    })
}
