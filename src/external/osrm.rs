use std::env;

use crate::error::{upstream_error, Error};

#[tracing::instrument]
pub async fn route(
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
) -> Result<serde_json::Value, Error> {
    let api_base = env::var("OSRM_API_BASE")?;

    fetch_route(&api_base, lat1, lng1, lat2, lng2).await
}

/// Queries a single driving route between two points and relays the
/// upstream JSON verbatim. OSRM takes coordinates in lng,lat order.
#[tracing::instrument]
pub async fn fetch_route(
    api_base: &str,
    lat1: f64,
    lng1: f64,
    lat2: f64,
    lng2: f64,
) -> Result<serde_json::Value, Error> {
    let url = format!(
        "{}/route/v1/driving/{},{};{},{}?overview=false",
        api_base, lng1, lat1, lng2, lat2
    );

    let res = reqwest::Client::new().get(url).send().await?;

    if res.status().as_u16() != 200 {
        return Err(upstream_error());
    }

    let data = res.json().await?;

    Ok(data)
}
