use async_trait::async_trait;

use crate::entities::Destination;
use crate::error::Error;

#[async_trait]
pub trait DestinationAPI {
    /// Returns every destination, ordered by its display position.
    async fn list_destinations(&self) -> Result<Vec<Destination>, Error>;

    /// Appends a destination at the end of the current sequence and
    /// returns it with its store-assigned id.
    async fn create_destination(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<Destination, Error>;

    /// Renumbers destinations so that `ids[i]` ends up at position `i`.
    /// Best-effort: an unknown id aborts mid-sequence, leaving earlier
    /// positions already renumbered.
    async fn reorder_destinations(&self, ids: Vec<i64>) -> Result<(), Error>;

    async fn delete_destination(&self, id: i64) -> Result<(), Error>;
}

pub trait API: DestinationAPI {}
