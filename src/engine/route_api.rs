use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, RoutePath},
    error::Error,
    external::osrm,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_route(&self, start: Coordinates, end: Coordinates) -> Result<RoutePath, Error> {
        osrm::route(&self.client, &self.config.osrm_base, start, end).await
    }
}
