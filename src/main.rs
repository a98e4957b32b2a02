use std::env;

use sqlx::sqlite::SqlitePoolOptions;

use itinera::engine::Engine;
use itinera::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let db_uri = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:itinera.db?mode=rwc".into());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_uri)
        .await
        .unwrap();

    let engine = Engine::new(pool).await.unwrap();

    serve(engine).await;
}
