mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    response::Html,
    routing::{delete, get, post},
    Router,
};

use crate::api::API;
use crate::server::handlers::{destinations, directions, osrm};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T) {
    tracing_subscriber::fmt::init();

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(router(api).into_make_service())
        .await
        .unwrap();
}

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/", get(root))
        .route(
            "/destinations",
            get(destinations::list).post(destinations::create),
        )
        .route("/destinations/:id", delete(destinations::destroy))
        .route("/destinations/update-order", post(destinations::update_order))
        .route("/calculate-distance-time", post(directions::calculate))
        .route("/proxy-osrm", get(osrm::proxy))
        .layer(Extension(api))
}

// shell page mounting the map front end
async fn root() -> Html<&'static str> {
    Html(include_str!("index.html"))
}
