mod location;
mod place;
mod region;
mod route;

pub use location::Coordinates;
pub use place::PlaceSuggestion;
pub use region::{Region, DESTINATION_PIN_COLOR, START_PIN_COLOR, TILE_URL_TEMPLATE};
pub use route::RoutePath;
