pub mod google_maps;
pub mod osrm;
