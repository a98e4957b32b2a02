use httpmock::prelude::*;
use serde_json::json;

use itinera::external::google_maps::fetch_route_summary;

fn directions_body() -> serde_json::Value {
    json!({
        "status": "OK",
        "routes": [
            {
                "legs": [
                    {
                        "distance": { "text": "225 km", "value": 225000 },
                        "duration": { "text": "2 hours 41 mins", "value": 9660 }
                    },
                    {
                        "distance": { "text": "1 km", "value": 1000 },
                        "duration": { "text": "3 mins", "value": 180 }
                    }
                ]
            }
        ]
    })
}

#[tokio::test]
async fn summarizes_first_leg_of_first_route() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/api/directions/json")
            .query_param("key", "test-key")
            .query_param("origin", "Cairo")
            .query_param("destination", "Alexandria")
            .query_param("waypoints", "Giza|Tanta");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(directions_body());
    });

    let summary = fetch_route_summary(
        &server.base_url(),
        "test-key",
        "Cairo".into(),
        "Alexandria".into(),
        vec!["Giza".into(), "Tanta".into()],
    )
    .await
    .unwrap();

    mock.assert();
    assert_eq!(summary.distance, "225 km");
    assert_eq!(summary.duration, "2 hours 41 mins");
}

#[tokio::test]
async fn empty_waypoints_join_to_an_empty_parameter() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/api/directions/json")
            .query_param("waypoints", "");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(directions_body());
    });

    fetch_route_summary(
        &server.base_url(),
        "test-key",
        "Cairo".into(),
        "Alexandria".into(),
        vec![],
    )
    .await
    .unwrap();

    mock.assert();
}

#[tokio::test]
async fn non_ok_api_status_is_an_upstream_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/directions/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "status": "ZERO_RESULTS" }));
    });

    let err = fetch_route_summary(
        &server.base_url(),
        "test-key",
        "Cairo".into(),
        "Atlantis".into(),
        vec![],
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn missing_first_route_is_an_upstream_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/directions/json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(json!({ "status": "OK", "routes": [] }));
    });

    let err = fetch_route_summary(
        &server.base_url(),
        "test-key",
        "Cairo".into(),
        "Alexandria".into(),
        vec![],
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn upstream_5xx_is_an_upstream_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/directions/json");
        then.status(503);
    });

    let err = fetch_route_summary(
        &server.base_url(),
        "test-key",
        "Cairo".into(),
        "Alexandria".into(),
        vec![],
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, 4);
}

#[tokio::test]
async fn upstream_4xx_is_rejected_as_invalid_input() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/maps/api/directions/json");
        then.status(400);
    });

    let err = fetch_route_summary(
        &server.base_url(),
        "bad-key",
        "Cairo".into(),
        "Alexandria".into(),
        vec![],
    )
    .await
    .unwrap_err();

    assert_eq!(err.code, 101);
}
