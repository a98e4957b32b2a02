use serde::{Deserialize, Serialize};

/// A named geographic point on the trip, with a display position.
///
/// `order` values form a dense `0..count-1` sequence after a successful
/// reorder; deletes may leave gaps until the next reorder.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub order: i64,
}
