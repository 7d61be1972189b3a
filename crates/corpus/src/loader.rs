use crate::error::{CorpusError, Result};
use crate::workspace::Workspace;
use serde_json::Value;

/// Chapter-count metadata, one fixed file for the whole corpus.
pub const CHAPTER_COUNT_FILENAME: &str = "bible_book_chapters.json";

impl Workspace {
    /// Load `filename` from the workspace and return its JSON verbatim.
    pub fn load_json(&self, filename: &str) -> Result<Value> {
        let path = self.resolve(filename);
        if !path.exists() {
            return Err(CorpusError::NotFound {
                filename: filename.to_string(),
            });
        }
        let text = std::fs::read_to_string(&path).map_err(|source| CorpusError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CorpusError::Parse { path, source })
    }

    pub fn load_chapter_counts(&self) -> Result<Value> {
        self.load_json(CHAPTER_COUNT_FILENAME)
    }
}
