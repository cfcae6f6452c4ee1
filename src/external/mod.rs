pub mod osrm;
pub mod photon;
