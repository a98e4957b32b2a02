use axum::extract::Json;
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};
use crate::external::google_maps::{self, RouteSummary};

#[derive(Serialize, Deserialize)]
pub struct CalculateParams {
    origin: String,
    destination: String,
    #[serde(default)]
    waypoints: Vec<String>,
}

pub async fn calculate(Json(params): Json<CalculateParams>) -> Result<Json<RouteSummary>, Error> {
    if params.origin.is_empty() {
        return Err(validation_error("origin must be a non-empty string"));
    }

    if params.destination.is_empty() {
        return Err(validation_error("destination must be a non-empty string"));
    }

    let summary =
        google_maps::route_summary(params.origin, params.destination, params.waypoints).await?;

    Ok(summary.into())
}
