use super::Engine;

use async_trait::async_trait;

use crate::{api::SuggestionAPI, entities::PlaceSuggestion, error::Error, external::photon};

#[async_trait]
impl SuggestionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_suggestions(&self, query: &str) -> Result<Vec<PlaceSuggestion>, Error> {
        photon::search(&self.client, &self.config.photon_base, query).await
    }
}
