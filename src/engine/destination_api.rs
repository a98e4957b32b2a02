use super::Engine;

use async_trait::async_trait;
use sqlx::Executor;

use crate::{
    api::DestinationAPI,
    entities::Destination,
    error::{not_found_error, validation_error, Error},
};

#[async_trait]
impl DestinationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_destinations(&self) -> Result<Vec<Destination>, Error> {
        let mut conn = self.pool.acquire().await?;

        let destinations = sqlx::query_as::<_, Destination>(
            r#"SELECT id, name, latitude, longitude, "order" FROM destinations ORDER BY "order" ASC"#,
        )
        .fetch_all(&mut conn)
        .await?;

        Ok(destinations)
    }

    #[tracing::instrument(skip(self))]
    async fn create_destination(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Destination, Error> {
        if name.is_empty() || name.chars().count() > 255 {
            return Err(validation_error(
                "name must be a non-empty string of at most 255 characters",
            ));
        }

        let mut conn = self.pool.acquire().await?;

        // append semantics: new entries go after everything currently stored,
        // delete gaps are not reindexed
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM destinations")
            .fetch_one(&mut conn)
            .await?;

        let result = conn
            .execute(
                sqlx::query(
                    r#"INSERT INTO destinations (name, latitude, longitude, "order") VALUES (?, ?, ?, ?)"#,
                )
                .bind(&name)
                .bind(latitude)
                .bind(longitude)
                .bind(count),
            )
            .await?;

        Ok(Destination {
            id: result.last_insert_rowid(),
            name,
            latitude,
            longitude,
            order: count,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn reorder_destinations(&self, ids: Vec<i64>) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        // best-effort: an unknown id aborts here, rows renumbered so far stay
        for (position, id) in ids.iter().enumerate() {
            let result = conn
                .execute(
                    sqlx::query(r#"UPDATE destinations SET "order" = ? WHERE id = ?"#)
                        .bind(position as i64)
                        .bind(id),
                )
                .await?;

            if result.rows_affected() == 0 {
                return Err(not_found_error());
            }
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_destination(&self, id: i64) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM destinations WHERE id = ?").bind(id))
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error());
        }

        Ok(())
    }
}
