use std::sync::Arc;

use reqwest::Client as HttpClient;

use crate::{
    config::Config,
    error::AppResult,
    models::{ChatReply, Mode, Query},
    services::{
        anime_pipeline::AnimeQueryPipeline,
        media_pipeline::MediaQueryPipeline,
        providers::{JikanProvider, OmdbProvider, TvMazeProvider},
        timeout::TimeoutGuard,
    },
};

/// Routes chat queries to the pipeline for the requested mode
///
/// Each call is independent; overlapping submissions are not queued, so
/// replies arrive in completion order.
pub struct RecommendationService {
    anime: AnimeQueryPipeline,
    media: MediaQueryPipeline,
}

impl RecommendationService {
    pub fn new(anime: AnimeQueryPipeline, media: MediaQueryPipeline) -> Self {
        Self { anime, media }
    }

    /// Wires the production providers from configuration
    pub fn from_config(config: &Config) -> Self {
        let http_client = HttpClient::new();
        let guard = TimeoutGuard::new(config.request_timeout());
        let limit = config.recommendations_limit;

        let jikan = JikanProvider::new(http_client.clone(), config.anime_api_url.clone());
        let tvmaze = TvMazeProvider::new(http_client.clone(), config.tv_api_url.clone());
        let omdb = OmdbProvider::new(
            http_client,
            config.film_api_key.clone(),
            config.film_api_url.clone(),
        );

        Self::new(
            AnimeQueryPipeline::new(Arc::new(jikan), guard, limit),
            MediaQueryPipeline::new(Arc::new(tvmaze), Arc::new(omdb), guard, limit),
        )
    }

    /// Validates the text and runs the pipeline selected by `mode`
    ///
    /// Blank text is the only error; upstream trouble is reported inside the
    /// reply.
    pub async fn submit_query(&self, text: &str, mode: Mode) -> AppResult<ChatReply> {
        let query = Query::parse(text)?;

        tracing::info!(query = %query, mode = ?mode, "Dispatching query");

        let reply = match mode {
            Mode::Anime => self.anime.run(&query).await,
            Mode::Media => self.media.run(&query).await,
        };

        Ok(reply)
    }
}
