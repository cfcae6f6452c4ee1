use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

// polyline points are stored in (latitude, longitude) order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutePath(pub Vec<Coordinates>);

impl RoutePath {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.0
    }
}

impl FromIterator<Coordinates> for RoutePath {
    fn from_iter<I: IntoIterator<Item = Coordinates>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
