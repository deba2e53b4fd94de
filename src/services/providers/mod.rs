/// Upstream metadata source abstraction
///
/// Each provider wraps one third-party read-only JSON API (Jikan, TVMaze, OMDb)
/// and maps its records onto the common `Recommendation` shape. Providers only
/// report what happened; deciding whether a failure is fatal is left to the
/// pipelines.
use crate::{error::AppResult, models::Recommendation};

pub mod jikan;
pub mod omdb;
pub mod tvmaze;

pub use jikan::JikanProvider;
pub use omdb::OmdbProvider;
pub use tvmaze::TvMazeProvider;

/// Trait for recommendation sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Search the source for titles matching `query`
    ///
    /// `limit` is a hint for sources that accept a result count; others ignore
    /// it and return their native page.
    async fn search(&self, query: &str, limit: usize) -> AppResult<Vec<Recommendation>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Shared status check used by every HTTP provider
pub(crate) async fn ensure_success(
    source_name: &'static str,
    response: reqwest::Response,
) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::debug!(
        provider = source_name,
        status = status.as_u16(),
        body = %body,
        "Upstream returned non-success status"
    );

    Err(crate::error::AppError::UpstreamStatus {
        source_name,
        status: status.as_u16(),
    })
}
