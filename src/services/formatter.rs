//! Chat message rendering.
//!
//! Output is HTML-ish markup meant to be inserted as rich text by the chat
//! client. Every piece of text that came from the user or an upstream record
//! goes through [`escape_html`]; links are only ever taken from source fields.

use crate::models::{Mode, Query, Recommendation, SourceKind};

pub const ANIME_HEADER: &str = "🎌 Anime Recommendations";
pub const MEDIA_HEADER: &str = "🎬 Recommendations";

const LINK_PLACEHOLDER: &str = "#";
const UNKNOWN_TAGS: &str = "Unknown genres";
const MISSING_TYPE: &str = "N/A";

/// Escapes the characters that would let upstream text inject markup
///
/// Also used on `href` values; browsers decode the entities back, so the
/// link target is unchanged.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders a header followed by one block per recommendation, in input order
///
/// Anime entries are numbered; TV and film entries get a glyph marking their
/// source kind.
pub fn format(header: &str, items: &[Recommendation]) -> String {
    let mut message = format!("<strong>{}:</strong><br><br>", escape_html(header));

    let mut number = 0;
    for item in items {
        let marker = match item.kind {
            SourceKind::Anime => {
                number += 1;
                format!("{}.", number)
            }
            SourceKind::Tv => "📺".to_string(),
            SourceKind::Film => "🎬".to_string(),
        };
        message.push_str(&format_entry(&marker, item));
    }

    message
}

fn format_entry(marker: &str, item: &Recommendation) -> String {
    let link = item.link.as_deref().unwrap_or(LINK_PLACEHOLDER);
    let mut entry = format!(
        "{} <strong><a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></strong>",
        marker,
        escape_html(link),
        escape_html(&item.display_title)
    );

    if let Some(year) = &item.year {
        entry.push_str(&format!(" ({})", escape_html(year)));
    }
    entry.push_str("<br>");

    let tags = if item.tags.is_empty() {
        UNKNOWN_TAGS.to_string()
    } else {
        escape_html(&item.tags.join(", "))
    };

    match (item.kind, &item.rating_or_type) {
        (SourceKind::Anime, Some(score)) => {
            entry.push_str(&format!("⭐ Rating: {} | 🎭 {}<br>", escape_html(score), tags));
        }
        (SourceKind::Film, title_type) => {
            let title_type = title_type.as_deref().unwrap_or(MISSING_TYPE);
            entry.push_str(&format!("📝 Type: {}<br>", escape_html(title_type)));
        }
        _ => entry.push_str(&format!("🎭 {}<br>", tags)),
    }

    entry.push_str("<br>");
    entry
}

pub fn no_results_message(mode: Mode, query: &Query) -> String {
    let what = match mode {
        Mode::Anime => "anime",
        Mode::Media => "movies or series",
    };
    format!(
        "❌ No {} found for \"<strong>{}</strong>\". Try another search!",
        what,
        escape_html(query.as_str())
    )
}

pub fn unavailable_message(mode: Mode) -> String {
    match mode {
        Mode::Anime => {
            "⚠️ Unable to fetch anime recommendations. Please try again later.".to_string()
        }
        Mode::Media => "⚠️ Unable to fetch recommendations. Please try again later.".to_string(),
    }
}

/// Greeting shown when the chat opens or the mode is toggled
pub fn welcome_message(mode: Mode) -> String {
    let text = match mode {
        Mode::Anime => concat!(
            "Hello! 👋 I'm your Anime recommendation chatbot 🤖🎌\n\n",
            "I help you discover amazing anime series using real data from MyAnimeList.\n\n",
            "Just type:\n• An anime title\n• Or a genre / keyword\n\n",
            "Examples:\nNaruto\nOne Piece\nAttack on Titan\nRomance\nAction",
        ),
        Mode::Media => concat!(
            "Hello! 👋 I'm your TV Shows & Movies recommendation chatbot!\n\n",
            "Give me a show or movie name!\n\n",
            "Example: Friends, Breaking Bad, Interstellar",
        ),
    };
    text.replace('\n', "<br>")
}
