use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// A trimmed, non-empty search text supplied by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Trims the raw text and rejects it if nothing is left
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which recommendation domain a query is routed to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Anime,
    /// Movies and TV series
    Media,
}

impl Mode {
    /// Maps the persisted "movie mode" boolean onto a mode
    pub fn from_movie_flag(is_movie_mode: bool) -> Self {
        if is_movie_mode {
            Mode::Media
        } else {
            Mode::Anime
        }
    }

    pub fn is_movie_mode(self) -> bool {
        self == Mode::Media
    }

    /// Label shown next to the mode toggle
    pub fn label(self) -> &'static str {
        match self {
            Mode::Anime => "Anime",
            Mode::Media => "Movies/Series",
        }
    }
}
