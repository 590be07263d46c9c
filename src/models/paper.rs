use serde::Deserialize;

use super::{Authors, RawAuthors, SessionRef};

/// Value of `isAccepted` that removes a paper from the output
pub const REJECTED_FLAG: &str = "false";

/// Root of the submission export: a list of `<paper>` elements
#[derive(Debug, Default, Deserialize)]
pub struct PapersDocument {
    #[serde(rename = "paper", default)]
    pub papers: Vec<RawPaper>,
}

/// Paper element exactly as decoded from the export
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPaper {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub path_in_proceedings: String,
    #[serde(default)]
    pub doi: String,
    pub is_accepted: Option<String>,
    #[serde(default)]
    pub position_in_session: String,
    #[serde(default)]
    pub authors: RawAuthors,
    #[serde(default)]
    pub session: SessionRef,
}

/// Canonical paper record used by the grouping and formatting stages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaperRecord {
    pub id: String,
    pub title: String,
    pub path_in_proceedings: String,
    pub doi: String,
    /// Compared verbatim against [`REJECTED_FLAG`]; absent means accepted
    pub is_accepted: Option<String>,
    /// Integer in text form, parsed when the session is ordered
    pub position_in_session: String,
    pub authors: Authors,
    pub session: SessionRef,
}

impl PaperRecord {
    /// True unless the accepted flag is exactly `"false"`
    pub fn is_retained(&self) -> bool {
        self.is_accepted.as_deref() != Some(REJECTED_FLAG)
    }
}

impl From<RawPaper> for PaperRecord {
    fn from(raw: RawPaper) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            path_in_proceedings: raw.path_in_proceedings,
            doi: raw.doi,
            is_accepted: raw.is_accepted,
            position_in_session: raw.position_in_session,
            authors: Authors::from(raw.authors),
            session: raw.session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AuthorRecord;

    #[test]
    fn test_rejected_only_on_exact_false() {
        let mut paper = PaperRecord::default();
        assert!(paper.is_retained());

        paper.is_accepted = Some("false".to_string());
        assert!(!paper.is_retained());

        paper.is_accepted = Some("FALSE".to_string());
        assert!(paper.is_retained());

        paper.is_accepted = Some("true".to_string());
        assert!(paper.is_retained());
    }

    #[test]
    fn test_from_raw_normalizes_authors() {
        let raw = RawPaper {
            id: "7".to_string(),
            authors: RawAuthors {
                author: vec![AuthorRecord::new("Solo")],
            },
            ..Default::default()
        };

        let paper = PaperRecord::from(raw);
        assert_eq!(paper.id, "7");
        assert_eq!(paper.authors, Authors::One(AuthorRecord::new("Solo")));
        assert!(paper.session.is_unassigned());
    }
}
