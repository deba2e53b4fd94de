use serde::Serialize;

pub const UNKNOWN_TITLE: &str = "Unknown title";

/// Which upstream family a recommendation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Anime,
    Tv,
    Film,
}

/// Source-agnostic representation of one suggested title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: SourceKind,
    /// Never empty; falls back to "Unknown title"
    pub display_title: String,
    pub year: Option<String>,
    pub rating_or_type: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
}

impl Recommendation {
    pub fn new(kind: SourceKind, title: Option<String>) -> Self {
        let display_title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_string());

        Self {
            kind,
            display_title,
            year: None,
            rating_or_type: None,
            tags: Vec::new(),
            link: None,
        }
    }
}

/// Outcome class of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Recommendations,
    NoResults,
    Unavailable,
}

/// What a pipeline hands back to the chat caller
///
/// `message` is already escaped markup, safe to render as rich text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub kind: ReplyKind,
    pub message: String,
    pub recommendations: Vec<Recommendation>,
}

impl ChatReply {
    pub fn recommendations(message: String, recommendations: Vec<Recommendation>) -> Self {
        Self {
            kind: ReplyKind::Recommendations,
            message,
            recommendations,
        }
    }

    pub fn no_results(message: String) -> Self {
        Self {
            kind: ReplyKind::NoResults,
            message,
            recommendations: Vec::new(),
        }
    }

    pub fn unavailable(message: String) -> Self {
        Self {
            kind: ReplyKind::Unavailable,
            message,
            recommendations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_title_falls_back() {
        let rec = Recommendation::new(SourceKind::Anime, None);
        assert_eq!(rec.display_title, UNKNOWN_TITLE);

        let rec = Recommendation::new(SourceKind::Tv, Some("   ".to_string()));
        assert_eq!(rec.display_title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_reply_kind_serialization() {
        let reply = ChatReply::no_results("nothing".to_string());
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "no_results");
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 0);
    }
}
