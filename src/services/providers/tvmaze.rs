/// TVMaze API provider
///
/// GET /search/shows?q=<query> returns a bare JSON list of `{score, show}` hits.
/// The endpoint has no result-count parameter, so `limit` is ignored here and
/// truncation happens in the media pipeline.
use crate::{
    error::AppResult,
    models::{Recommendation, TvMazeSearchHit},
    services::providers::{ensure_success, RecommendationSource},
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct TvMazeProvider {
    http_client: HttpClient,
    api_url: String,
}

impl TvMazeProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl RecommendationSource for TvMazeProvider {
    async fn search(&self, query: &str, _limit: usize) -> AppResult<Vec<Recommendation>> {
        let url = format!("{}/search/shows", self.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query)])
            .send()
            .await?;

        let response = ensure_success(self.name(), response).await?;
        let hits: Vec<TvMazeSearchHit> = response.json().await?;

        let recommendations: Vec<Recommendation> = hits
            .into_iter()
            .map(|hit| Recommendation::from(hit.show))
            .collect();

        tracing::info!(
            query = %query,
            results = recommendations.len(),
            provider = self.name(),
            "TV search completed"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "tvmaze"
    }
}
