//! Rendering of sessions into `|`-delimited text blocks.
//!
//! Field values are written verbatim. A `|` inside a title or author name
//! is not escaped and will shift the columns of that row.

use tracing::info;

use crate::models::{PaperRecord, SessionMap};

pub const DELIMITER: &str = "|";
pub const NEW_LINE: &str = "\n";
pub const CSV_HEADER: &str = "ID|path|title|authors|doi|track";

/// Formatted block for one session: header line plus one row per paper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCsv {
    pub key: String,
    pub content: String,
}

impl SessionCsv {
    /// Everything after the header line
    pub fn rows(&self) -> &str {
        self.content
            .split_once(NEW_LINE)
            .map(|(_, rows)| rows)
            .unwrap_or("")
    }
}

/// Render one paper in column order `ID|path|title|authors|doi|track`
pub fn format_row(paper: &PaperRecord) -> String {
    [
        paper.id.as_str(),
        paper.path_in_proceedings.as_str(),
        paper.title.as_str(),
        paper.authors.joined().as_str(),
        paper.doi.as_str(),
        paper.session.short_title.as_str(),
    ]
    .join(DELIMITER)
}

/// Header followed by one row per paper, newline separated, no trailing newline
pub fn format_session(papers: &[PaperRecord]) -> String {
    let mut content = String::from(CSV_HEADER);
    for paper in papers {
        content.push_str(NEW_LINE);
        content.push_str(&format_row(paper));
    }
    content
}

/// Render every session in map order
pub fn format_sessions(sessions: &SessionMap) -> Vec<SessionCsv> {
    info!("Generating csv list from sessions");

    sessions
        .iter()
        .map(|session| SessionCsv {
            key: session.key.clone(),
            content: format_session(&session.papers),
        })
        .collect()
}
