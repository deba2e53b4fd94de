use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    models::{ChatReply, Mode, Query},
    services::{
        formatter::{self, ANIME_HEADER},
        providers::RecommendationSource,
        shuffle::fisher_yates,
        timeout::TimeoutGuard,
    },
};

/// Single-source anime pipeline: fetch, shuffle, truncate, format
///
/// Over-fetches twice the selection size so the shuffle has something to
/// choose from.
pub struct AnimeQueryPipeline {
    source: Arc<dyn RecommendationSource>,
    guard: TimeoutGuard,
    limit: usize,
    // Only ever locked synchronously, never across an await
    rng: Mutex<StdRng>,
}

impl AnimeQueryPipeline {
    pub fn new(source: Arc<dyn RecommendationSource>, guard: TimeoutGuard, limit: usize) -> Self {
        Self {
            source,
            guard,
            limit,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    pub fn fetch_limit(&self) -> usize {
        self.limit * 2
    }

    /// Always resolves; upstream failures become an "unavailable" reply
    pub async fn run(&self, query: &Query) -> ChatReply {
        let source_name = self.source.name();
        let fetched = self
            .guard
            .run(
                source_name,
                self.source.search(query.as_str(), self.fetch_limit()),
            )
            .await;

        let mut recommendations = match fetched {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::error!(
                    query = %query,
                    provider = source_name,
                    kind = %e.kind(),
                    error = %e,
                    "Anime fetch failed"
                );
                return ChatReply::unavailable(formatter::unavailable_message(Mode::Anime));
            }
        };

        if recommendations.is_empty() {
            tracing::info!(query = %query, "No anime found");
            return ChatReply::no_results(formatter::no_results_message(Mode::Anime, query));
        }

        {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            fisher_yates(&mut recommendations, &mut *rng);
        }
        recommendations.truncate(self.limit);

        tracing::info!(
            query = %query,
            selected = recommendations.len(),
            "Anime recommendations selected"
        );

        let message = formatter::format(ANIME_HEADER, &recommendations);
        ChatReply::recommendations(message, recommendations)
    }
}
