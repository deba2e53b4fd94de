use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Anime metadata API base URL (Jikan)
    #[serde(default = "default_anime_api_url")]
    pub anime_api_url: String,

    /// TV show search API base URL (TVMaze)
    #[serde(default = "default_tv_api_url")]
    pub tv_api_url: String,

    /// Film/show database API base URL (OMDb)
    #[serde(default = "default_film_api_url")]
    pub film_api_url: String,

    /// Film/show database API key
    pub film_api_key: String,

    /// Deadline applied to every outbound request, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Number of recommendations kept per source
    #[serde(default = "default_recommendations_limit")]
    pub recommendations_limit: usize,

    /// JSON file holding the persisted mode flag (in-memory when unset)
    #[serde(default)]
    pub mode_store_path: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_anime_api_url() -> String {
    "https://api.jikan.moe/v4".to_string()
}

fn default_tv_api_url() -> String {
    "https://api.tvmaze.com".to_string()
}

fn default_film_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_recommendations_limit() -> usize {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let vars = vec![("FILM_API_KEY".to_string(), "secret".to_string())];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.film_api_key, "secret");
        assert_eq!(config.anime_api_url, "https://api.jikan.moe/v4");
        assert_eq!(config.tv_api_url, "https://api.tvmaze.com");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.recommendations_limit, 5);
        assert_eq!(config.mode_store_path, None);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let vars: Vec<(String, String)> = vec![];
        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("FILM_API_KEY".to_string(), "k".to_string()),
            ("REQUEST_TIMEOUT_MS".to_string(), "250".to_string()),
            ("RECOMMENDATIONS_LIMIT".to_string(), "3".to_string()),
            ("MODE_STORE_PATH".to_string(), "/tmp/mode.json".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();

        assert_eq!(config.request_timeout(), Duration::from_millis(250));
        assert_eq!(config.recommendations_limit, 3);
        assert_eq!(config.mode_store_path.as_deref(), Some("/tmp/mode.json"));
    }
}
