//! # KJV Corpus
//!
//! Read-only access to a directory of per-book KJV JSON files.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//!     ├── Books.json                  ordered canonical book names
//!     ├── bible_book_chapters.json    chapter-count metadata
//!     ├── Genesis.json
//!     ├── 1John.json                  (or "1 John.json", "1_John.json")
//!     └── ...
//! ```
//!
//! Roots are searched in order (`KJV_ROOT`, the working directory, the executable's directory);
//! see [`Workspace`].
//!
//! ## Example
//!
//! ```no_run
//! use kjv_corpus::Workspace;
//!
//! fn main() -> kjv_corpus::Result<()> {
//!     let workspace = Workspace::discover();
//!     let books = workspace.list_books()?;
//!     let john = workspace.load_book("1 john")?;
//!
//!     println!("{} books; 1 John: {john}", books.len());
//!     Ok(())
//! }
//! ```

mod error;
mod index;
mod loader;
mod resolver;
mod workspace;

pub use error::{CorpusError, Result};
pub use index::{BookIndex, BOOKS_INDEX_FILENAME};
pub use loader::CHAPTER_COUNT_FILENAME;
pub use resolver::{
    base_title, candidate_filenames, resolve_book, resolve_with_index, Resolution,
    ResolutionSource,
};
pub use workspace::{Workspace, ROOT_ENV};
