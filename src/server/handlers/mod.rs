pub mod destinations;
pub mod directions;
pub mod osrm;
