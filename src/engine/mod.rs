mod destination_api;

use sqlx::{Executor, Pool, Sqlite};

use crate::{api::API, error::Error};

type Database = Sqlite;

pub struct Engine {
    pool: Pool<Database>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub async fn new(pool: Pool<Database>) -> Result<Self, Error> {
        // destination service
        pool.execute(
            r#"CREATE TABLE IF NOT EXISTS destinations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                "order" INTEGER NOT NULL
            )"#,
        )
        .await?;

        Ok(Self { pool })
    }
}

impl API for Engine {}
