use std::collections::HashMap;

use serde::Deserialize;

use super::PaperRecord;

/// Bucket key for papers without a session short title
pub const UNASSIGNED_SESSION: &str = "No-Session";

/// Session reference carried by each paper
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionRef {
    /// Empty when the paper has not been scheduled
    #[serde(rename = "shortTitle", default)]
    pub short_title: String,
}

impl SessionRef {
    pub fn new(short_title: impl Into<String>) -> Self {
        Self {
            short_title: short_title.into(),
        }
    }

    pub fn is_unassigned(&self) -> bool {
        self.short_title.is_empty()
    }
}

/// One named bucket of papers
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub key: String,
    pub papers: Vec<PaperRecord>,
}

/// Papers grouped by session key.
///
/// Keys iterate in the order their first paper was inserted; papers within a
/// session keep append order until the ordering stage sorts them.
#[derive(Debug, Clone, Default)]
pub struct SessionMap {
    sessions: Vec<Session>,
    index: HashMap<String, usize>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paper to the bucket for `key`, creating the bucket on first sight
    pub fn push(&mut self, key: &str, paper: PaperRecord) {
        match self.index.get(key) {
            Some(&slot) => self.sessions[slot].papers.push(paper),
            None => {
                self.index.insert(key.to_string(), self.sessions.len());
                self.sessions.push(Session {
                    key: key.to_string(),
                    papers: vec![paper],
                });
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.sessions.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Session> {
        self.sessions.iter_mut()
    }

    /// Number of sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Total number of papers across all sessions
    pub fn paper_count(&self) -> usize {
        self.sessions.iter().map(|session| session.papers.len()).sum()
    }
}

#[cfg(test)]
impl SessionMap {
    pub(crate) fn get(&self, key: &str) -> Option<&[PaperRecord]> {
        self.index
            .get(key)
            .map(|&slot| self.sessions[slot].papers.as_slice())
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.sessions.iter().map(|session| session.key.as_str())
    }
}

impl<'a> IntoIterator for &'a SessionMap {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(id: &str) -> PaperRecord {
        PaperRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_keys_follow_first_insertion() {
        let mut map = SessionMap::new();
        map.push("B", paper("1"));
        map.push("A", paper("2"));
        map.push("B", paper("3"));

        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.paper_count(), 3);
    }

    #[test]
    fn test_bucket_is_append_only() {
        let mut map = SessionMap::new();
        map.push("S1", paper("1"));
        map.push("S1", paper("2"));

        let ids: Vec<&str> = map
            .get("S1")
            .unwrap()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert!(map.get("S2").is_none());
    }

    #[test]
    fn test_empty_session_ref_is_unassigned() {
        assert!(SessionRef::default().is_unassigned());
        assert!(!SessionRef::new("S1").is_unassigned());
    }
}
