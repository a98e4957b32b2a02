use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{invalid_input_error, upstream_error, Error};

/// Distance and duration of the first leg of the first returned route,
/// as the human-readable text the directions API produces.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance: String,
    pub duration: String,
}

#[derive(Clone, Debug, Deserialize)]
struct Response {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Clone, Debug, Deserialize)]
struct Route {
    legs: Vec<Leg>,
}

#[derive(Clone, Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
}

#[derive(Clone, Debug, Deserialize)]
struct TextValue {
    text: String,
}

#[tracing::instrument]
pub async fn route_summary(
    origin: String,
    destination: String,
    waypoints: Vec<String>,
) -> Result<RouteSummary, Error> {
    let api_base = env::var("GOOGLE_MAPS_API_BASE")?;
    let key = env::var("GOOGLE_MAPS_API_KEY")?;

    fetch_route_summary(&api_base, &key, origin, destination, waypoints).await
}

#[tracing::instrument(skip(key))]
pub async fn fetch_route_summary(
    api_base: &str,
    key: &str,
    origin: String,
    destination: String,
    waypoints: Vec<String>,
) -> Result<RouteSummary, Error> {
    let url = format!("{}/maps/api/directions/json", api_base);

    let res = reqwest::Client::new()
        .get(url)
        .query(&[("key", key)])
        .query(&[("origin", origin)])
        .query(&[("destination", destination)])
        .query(&[("waypoints", waypoints.join("|"))])
        .send()
        .await?;

    let status_code = res.status().as_u16();

    if status_code >= 400 && status_code < 500 {
        return Err(invalid_input_error());
    } else if status_code != 200 {
        return Err(upstream_error());
    }

    let data: Response = res.json().await?;

    if data.status != "OK" {
        return Err(upstream_error());
    }

    let leg = data
        .routes
        .first()
        .and_then(|route| route.legs.first())
        .ok_or_else(upstream_error)?;

    Ok(RouteSummary {
        distance: leg.distance.text.clone(),
        duration: leg.duration.text.clone(),
    })
}
