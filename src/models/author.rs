use serde::Deserialize;

/// Separator placed between author names in the `authors` column
pub const AUTHOR_SEPARATOR: &str = " & ";

/// Author element as it appears in the submission export
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorRecord {
    #[serde(default)]
    pub name: String,
}

impl AuthorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Raw `<authors>` wrapper holding the repeated `<author>` children
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAuthors {
    #[serde(rename = "author", default)]
    pub author: Vec<AuthorRecord>,
}

/// Author list of a paper, normalized once when the record is built.
///
/// A paper with a single author is held as [`Authors::One`]; every other
/// shape (including an absent `<authors>` element) is [`Authors::Many`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authors {
    One(AuthorRecord),
    Many(Vec<AuthorRecord>),
}

impl Default for Authors {
    fn default() -> Self {
        Authors::Many(Vec::new())
    }
}

impl Authors {
    /// Display string for the `authors` column.
    ///
    /// # Examples
    ///
    /// ```
    /// use proceedings_csv::models::{AuthorRecord, Authors};
    ///
    /// let one = Authors::from(vec![AuthorRecord::new("Ada Lovelace")]);
    /// assert_eq!(one.joined(), "Ada Lovelace");
    ///
    /// let two = Authors::from(vec![AuthorRecord::new("A"), AuthorRecord::new("B")]);
    /// assert_eq!(two.joined(), "A & B");
    /// ```
    pub fn joined(&self) -> String {
        match self {
            Authors::One(author) => author.name.clone(),
            Authors::Many(authors) => authors
                .iter()
                .map(|author| author.name.as_str())
                .collect::<Vec<&str>>()
                .join(AUTHOR_SEPARATOR),
        }
    }
}

#[cfg(test)]
impl Authors {
    pub(crate) fn len(&self) -> usize {
        match self {
            Authors::One(_) => 1,
            Authors::Many(authors) => authors.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<AuthorRecord>> for Authors {
    fn from(mut authors: Vec<AuthorRecord>) -> Self {
        if authors.len() == 1 {
            Authors::One(authors.remove(0))
        } else {
            Authors::Many(authors)
        }
    }
}

impl From<RawAuthors> for Authors {
    fn from(raw: RawAuthors) -> Self {
        Authors::from(raw.author)
    }
}
