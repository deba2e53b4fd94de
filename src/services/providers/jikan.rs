/// Jikan (unofficial MyAnimeList) API provider
///
/// Single-endpoint search: GET /anime?q=<query>&limit=<n>. No credential needed.
use crate::{
    error::AppResult,
    models::{JikanSearchResponse, Recommendation},
    services::providers::{ensure_success, RecommendationSource},
};
use reqwest::Client as HttpClient;

/// Largest page Jikan accepts; bigger limits are rejected with a 400
const MAX_PAGE_SIZE: usize = 25;

#[derive(Clone)]
pub struct JikanProvider {
    http_client: HttpClient,
    api_url: String,
}

impl JikanProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/anime", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl RecommendationSource for JikanProvider {
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Recommendation>> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[
                ("q", query.to_string()),
                ("limit", limit.clamp(1, MAX_PAGE_SIZE).to_string()),
            ])
            .send()
            .await?;

        let response = ensure_success(self.name(), response).await?;
        let body: JikanSearchResponse = response.json().await?;

        let recommendations: Vec<Recommendation> = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(Recommendation::from)
            .collect();

        tracing::info!(
            query = %query,
            results = recommendations.len(),
            provider = self.name(),
            "Anime search completed"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "jikan"
    }
}
