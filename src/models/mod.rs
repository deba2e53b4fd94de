use serde::Deserialize;

mod query;
mod recommendation;

pub use query::{Mode, Query};
pub use recommendation::{ChatReply, Recommendation, ReplyKind, SourceKind, UNKNOWN_TITLE};

pub const UNKNOWN_ANIME_YEAR: &str = "Unknown year";
pub const UNKNOWN_TV_YEAR: &str = "Unknown";
pub const MISSING_SCORE: &str = "N/A";

const IMDB_TITLE_URL: &str = "https://www.imdb.com/title";

// ============================================================================
// Jikan (MyAnimeList) API Types
// ============================================================================

/// Response from GET /anime
#[derive(Debug, Clone, Deserialize)]
pub struct JikanSearchResponse {
    #[serde(default)]
    pub data: Option<Vec<JikanAnime>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanAnime {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub genres: Vec<JikanGenre>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JikanGenre {
    pub name: String,
}

impl From<JikanAnime> for Recommendation {
    fn from(anime: JikanAnime) -> Self {
        let mut rec = Recommendation::new(SourceKind::Anime, anime.title);
        rec.year = Some(
            anime
                .year
                .map(|y| y.to_string())
                .unwrap_or_else(|| UNKNOWN_ANIME_YEAR.to_string()),
        );
        rec.rating_or_type = Some(
            anime
                .score
                .map(|s| s.to_string())
                .unwrap_or_else(|| MISSING_SCORE.to_string()),
        );
        rec.tags = anime.genres.into_iter().map(|g| g.name).collect();
        rec.link = anime.url;
        rec
    }
}

// ============================================================================
// TVMaze API Types
// ============================================================================

/// One hit from GET /search/shows; the body is a bare list of these
#[derive(Debug, Clone, Deserialize)]
pub struct TvMazeSearchHit {
    pub show: TvMazeShow,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TvMazeShow {
    #[serde(default)]
    pub name: Option<String>,
    /// ISO date, e.g. "2002-10-03"
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<TvMazeShow> for Recommendation {
    fn from(show: TvMazeShow) -> Self {
        let year = show
            .premiered
            .as_deref()
            .and_then(|date| date.split('-').next())
            .filter(|y| !y.is_empty())
            .unwrap_or(UNKNOWN_TV_YEAR)
            .to_string();

        let mut rec = Recommendation::new(SourceKind::Tv, show.name);
        rec.year = Some(year);
        rec.tags = show.genres;
        rec.link = show.url;
        rec
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Response from GET /?s=
///
/// `Search` is absent (not empty) when nothing matched; `Error` explains why.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbTitle>>,
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OmdbTitle {
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Type", default)]
    pub title_type: Option<String>,
}

impl From<OmdbTitle> for Recommendation {
    fn from(title: OmdbTitle) -> Self {
        let mut rec = Recommendation::new(SourceKind::Film, title.title);
        rec.year = title.year.filter(|y| !y.is_empty());
        rec.rating_or_type = title.title_type.filter(|t| !t.is_empty());
        rec.link = title
            .imdb_id
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}/{}", IMDB_TITLE_URL, id));
        rec
    }
}
