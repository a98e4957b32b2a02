use axum::extract::{Extension, Json, Path};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::entities::Destination;
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    name: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateOrderParams {
    destinations: Vec<i64>,
}

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<Destination>>, Error> {
    let destinations = api.list_destinations().await?;

    Ok(destinations.into())
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<(StatusCode, Json<Destination>), Error> {
    let destination = api
        .create_destination(params.name, params.latitude, params.longitude)
        .await?;

    Ok((StatusCode::CREATED, destination.into()))
}

pub async fn update_order(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<UpdateOrderParams>,
) -> Result<Json<Value>, Error> {
    api.reorder_destinations(params.destinations).await?;

    Ok(json!({ "message": "Order updated successfully" }).into())
}

pub async fn destroy(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, Error> {
    api.delete_destination(id).await?;

    Ok(json!({ "message": "Destination deleted successfully" }).into())
}
