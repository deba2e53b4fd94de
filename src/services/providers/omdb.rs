/// OMDb API provider
///
/// GET /?apikey=<key>&s=<query>. OMDb answers 200 even for failures and flags
/// them with `"Response": "False"` plus an `Error` string, so the body has to
/// be inspected before trusting `Search`.
use crate::{
    error::{AppError, AppResult},
    models::{OmdbSearchResponse, Recommendation},
    services::providers::{ensure_success, RecommendationSource},
};
use reqwest::Client as HttpClient;

/// Error text OMDb uses for a well-formed search with zero matches
const NOT_FOUND_ERROR: &str = "Movie not found!";

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url,
        }
    }

    fn convert_api_response(&self, body: OmdbSearchResponse) -> AppResult<Vec<Recommendation>> {
        if let Some(titles) = body.search {
            return Ok(titles.into_iter().map(Recommendation::from).collect());
        }

        match body.error.as_deref() {
            None | Some(NOT_FOUND_ERROR) => Ok(Vec::new()),
            Some(error) => Err(AppError::ExternalApi(format!(
                "OMDb rejected search: {}",
                error
            ))),
        }
    }
}

#[async_trait::async_trait]
impl RecommendationSource for OmdbProvider {
    async fn search(&self, query: &str, _limit: usize) -> AppResult<Vec<Recommendation>> {
        let url = format!("{}/", self.api_url.trim_end_matches('/'));

        let response = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let response = ensure_success(self.name(), response).await?;
        let body: OmdbSearchResponse = response.json().await?;
        let recommendations = self.convert_api_response(body)?;

        tracing::info!(
            query = %query,
            results = recommendations.len(),
            provider = self.name(),
            "Film search completed"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FailureKind, services::providers::test_support::serve};
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    /// Accepts only `apikey=test_key`, like the real service
    async fn omdb_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        if params.get("apikey").map(String::as_str) != Some("test_key") {
            return Json(json!({"Response": "False", "Error": "Invalid API key!"}));
        }
        match params.get("s").map(String::as_str) {
            Some("Interstellar") => Json(json!({
                "Search": [{
                    "Title": "Interstellar",
                    "Year": "2014",
                    "imdbID": "tt0816692",
                    "Type": "movie"
                }],
                "totalResults": "1",
                "Response": "True"
            })),
            _ => Json(json!({"Response": "False", "Error": "Movie not found!"})),
        }
    }

    async fn provider_with_key(api_key: &str) -> OmdbProvider {
        let base = serve(Router::new().route("/", get(omdb_search))).await;
        OmdbProvider::new(reqwest::Client::new(), api_key.to_string(), base)
    }

    #[tokio::test]
    async fn test_search_sends_key_and_query() {
        let provider = provider_with_key("test_key").await;

        let results = provider.search("Interstellar", 5).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].display_title, "Interstellar");
        assert_eq!(
            results[0].link.as_deref(),
            Some("https://www.imdb.com/title/tt0816692")
        );
    }

    #[tokio::test]
    async fn test_search_not_found_is_empty() {
        let provider = provider_with_key("test_key").await;

        assert!(provider.search("qwertyuiop", 5).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_with_rejected_key_is_upstream_error() {
        let provider = provider_with_key("wrong").await;

        let err = provider.search("Interstellar", 5).await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::UpstreamError);
        assert!(matches!(err, AppError::ExternalApi(msg) if msg.contains("Invalid API key!")));
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let router = Router::new().route(
            "/",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = serve(router).await;
        let provider = OmdbProvider::new(reqwest::Client::new(), "k".to_string(), base);

        let err = provider.search("Interstellar", 5).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UpstreamStatus {
                source_name: "omdb",
                status: 503
            }
        ));
    }

    fn create_test_provider() -> OmdbProvider {
        OmdbProvider::new(
            reqwest::Client::new(),
            "test_key".to_string(),
            "http://test.local".to_string(),
        )
    }

    fn parse(json: &str) -> OmdbSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_convert_api_response_success() {
        let provider = create_test_provider();
        let body = parse(
            r#"{"Search": [
                {"Title": "Friends", "Year": "1994–2004", "imdbID": "tt0108778", "Type": "series"},
                {"Title": "Friends with Benefits", "Year": "2011", "imdbID": "tt1632708", "Type": "movie"}
            ], "Response": "True"}"#,
        );

        let result = provider.convert_api_response(body).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].display_title, "Friends");
        assert_eq!(result[0].rating_or_type.as_deref(), Some("series"));
        assert_eq!(result[1].year.as_deref(), Some("2011"));
    }

    #[test]
    fn test_convert_api_response_not_found_is_empty() {
        let provider = create_test_provider();
        let body = parse(r#"{"Response": "False", "Error": "Movie not found!"}"#);

        let result = provider.convert_api_response(body).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_convert_api_response_error_flag() {
        let provider = create_test_provider();
        let body = parse(r#"{"Response": "False", "Error": "Invalid API key!"}"#);

        let err = provider.convert_api_response(body).unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(msg) if msg.contains("Invalid API key!")));
    }
}
