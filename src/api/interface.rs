use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Coordinates, PlaceSuggestion, RoutePath};
use crate::error::Error;

#[async_trait]
pub trait SuggestionAPI {
    async fn find_suggestions(&self, query: &str) -> Result<Vec<PlaceSuggestion>, Error>;
}

#[async_trait]
pub trait RouteAPI {
    async fn find_route(&self, start: Coordinates, end: Coordinates) -> Result<RoutePath, Error>;
}

pub trait API: SuggestionAPI + RouteAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
