use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

pub const TILE_URL_TEMPLATE: &str = "https://a.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const START_PIN_COLOR: &str = "blue";
pub const DESTINATION_PIN_COLOR: &str = "red";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub fn initial() -> Self {
        Self {
            center: Coordinates::new(37.7749, -122.4194),
            latitude_delta: 0.1,
            longitude_delta: 0.1,
        }
    }

    pub fn selection(center: Coordinates) -> Self {
        Self {
            center,
            latitude_delta: 0.02,
            longitude_delta: 0.02,
        }
    }
}
