use crate::error::{CorpusError, Result};
use crate::workspace::Workspace;

/// Index of canonical book names.
pub const BOOKS_INDEX_FILENAME: &str = "Books.json";

/// Canonical book names in the order listed by `Books.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookIndex {
    books: Vec<String>,
}

impl BookIndex {
    pub fn new(books: Vec<String>) -> Self {
        Self { books }
    }

    pub fn load(workspace: &Workspace) -> Result<Self> {
        let value = workspace.load_json(BOOKS_INDEX_FILENAME)?;
        let books = serde_json::from_value(value).map_err(|source| CorpusError::InvalidIndex {
            filename: BOOKS_INDEX_FILENAME.to_string(),
            source,
        })?;
        Ok(Self { books })
    }

    pub fn books(&self) -> &[String] {
        &self.books
    }

    pub fn into_books(self) -> Vec<String> {
        self.books
    }

    /// First canonical name equal to `title` ignoring case and spaces.
    pub fn canonical_for(&self, title: &str) -> Option<&str> {
        let key = match_key(title);
        self.books
            .iter()
            .find(|book| match_key(book) == key)
            .map(String::as_str)
    }
}

pub(crate) fn match_key(name: &str) -> String {
    name.replace(' ', "").to_lowercase()
}
