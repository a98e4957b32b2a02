use axum::extract::{Json, Query};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{validation_error, Error};
use crate::external::osrm;

#[derive(Deserialize)]
pub struct RouteParams {
    lat1: Option<f64>,
    lng1: Option<f64>,
    lat2: Option<f64>,
    lng2: Option<f64>,
}

pub async fn proxy(Query(params): Query<RouteParams>) -> Result<Json<Value>, Error> {
    // every coordinate must be present before anything goes upstream
    let lat1 = params.lat1.ok_or_else(|| validation_error("lat1 is required"))?;
    let lng1 = params.lng1.ok_or_else(|| validation_error("lng1 is required"))?;
    let lat2 = params.lat2.ok_or_else(|| validation_error("lat2 is required"))?;
    let lng2 = params.lng2.ok_or_else(|| validation_error("lng2 is required"))?;

    let data = osrm::route(lat1, lng1, lat2, lng2).await?;

    Ok(data.into())
}
