use axum::Json;
use axum::extract::Query;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use serde::Deserialize;

use r2iss_core::models::inputs::ClinicalInputs;
use r2iss_core::models::result::ScoreResult;

use crate::error::ApiError;

/// Score one set of clinical inputs.
///
/// Bands may be given as codes (`"below_3_5"`) or display labels
/// (`"< 3.5 mg/L"`); missing cytogenetic flags count as absent.
pub async fn score(
    payload: Result<Json<ClinicalInputs>, JsonRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Json(inputs) = payload?;
    Ok(Json(r2iss_calculator::score(&inputs)))
}

/// Raw selections as a query string, e.g.
/// `?b2m=below_3_5&albumin=at_least_3_5&ldh=normal&del17p=true`.
#[derive(Deserialize)]
pub struct ScoreQuery {
    pub b2m: String,
    pub albumin: String,
    pub ldh: String,
    #[serde(default)]
    pub del17p: bool,
    #[serde(default)]
    pub t414: bool,
    #[serde(default)]
    pub gain1q: bool,
}

/// Same as [`score`] but for UIs that submit plain form selections.
pub async fn score_query(
    query: Result<Query<ScoreQuery>, QueryRejection>,
) -> Result<Json<ScoreResult>, ApiError> {
    let Query(q) = query?;
    let result =
        r2iss_calculator::score_labels(&q.b2m, &q.albumin, &q.ldh, q.del17p, q.t414, q.gain1q)?;
    Ok(Json(result))
}
