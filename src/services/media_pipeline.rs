use std::sync::Arc;

use crate::{
    models::{ChatReply, Mode, Query, Recommendation},
    services::{
        formatter::{self, MEDIA_HEADER},
        providers::RecommendationSource,
        timeout::TimeoutGuard,
    },
};

/// Two-source pipeline for TV series and films
///
/// Both sources are queried concurrently and the pipeline waits for both to
/// settle. A failing source contributes an empty list and never affects its
/// sibling. No shuffling: each source keeps its native order, TV first.
pub struct MediaQueryPipeline {
    tv_source: Arc<dyn RecommendationSource>,
    film_source: Arc<dyn RecommendationSource>,
    guard: TimeoutGuard,
    limit: usize,
}

impl MediaQueryPipeline {
    pub fn new(
        tv_source: Arc<dyn RecommendationSource>,
        film_source: Arc<dyn RecommendationSource>,
        guard: TimeoutGuard,
        limit: usize,
    ) -> Self {
        Self {
            tv_source,
            film_source,
            guard,
            limit,
        }
    }

    pub async fn run(&self, query: &Query) -> ChatReply {
        let (mut tv, mut films) = tokio::join!(
            self.fetch_branch(self.tv_source.as_ref(), query),
            self.fetch_branch(self.film_source.as_ref(), query),
        );

        tv.truncate(self.limit);
        films.truncate(self.limit);

        if tv.is_empty() && films.is_empty() {
            tracing::info!(query = %query, "No movies or series found");
            return ChatReply::no_results(formatter::no_results_message(Mode::Media, query));
        }

        tracing::info!(
            query = %query,
            tv_results = tv.len(),
            film_results = films.len(),
            "Media recommendations merged"
        );

        let mut recommendations = tv;
        recommendations.append(&mut films);

        let message = formatter::format(MEDIA_HEADER, &recommendations);
        ChatReply::recommendations(message, recommendations)
    }

    /// One fault-tolerant branch: any failure is logged and becomes an empty list
    async fn fetch_branch(
        &self,
        source: &dyn RecommendationSource,
        query: &Query,
    ) -> Vec<Recommendation> {
        let source_name = source.name();
        match self
            .guard
            .run(source_name, source.search(query.as_str(), self.limit))
            .await
        {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(
                    query = %query,
                    provider = source_name,
                    kind = %e.kind(),
                    error = %e,
                    "Source failed, continuing without it"
                );
                Vec::new()
            }
        }
    }
}
