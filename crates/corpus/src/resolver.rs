//! Book name → filename resolution.
//!
//! Inputs like `"1 John"`, `"1john"`, `"1John.json"` or `"1_John"` should all land on whatever
//! spelling actually exists on disk. The index supplies canonical casing; filename variants
//! cover the spacing conventions seen in corpora. Resolution never fails: when nothing
//! matches, a concrete filename is still returned so the subsequent load reports it.

use crate::error::Result;
use crate::index::BookIndex;
use crate::workspace::Workspace;
use serde::Serialize;
use serde_json::Value;

const JSON_SUFFIX: &str = ".json";

/// Which step of the resolution policy produced a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// A variant of the canonical index name exists on disk.
    IndexVariant,
    /// The index matched but no variant exists; the canonical filename is returned as-is.
    IndexCanonical,
    /// A variant of the caller's own spelling exists on disk.
    InputVariant,
    /// Nothing matched; `<input>.json` is returned unconditionally.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub filename: String,
    pub source: ResolutionSource,
}

/// Strip surrounding whitespace and a trailing `.json` (any case).
pub fn base_title(book: &str) -> &str {
    let raw = book.trim();
    let split = raw.len().saturating_sub(JSON_SUFFIX.len());
    match raw.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(JSON_SUFFIX) => &raw[..split],
        _ => raw,
    }
}

/// Filename candidates for a title: as written, spaces removed, spaces as underscores.
pub fn candidate_filenames(title: &str) -> [String; 3] {
    [
        format!("{title}{JSON_SUFFIX}"),
        format!("{}{JSON_SUFFIX}", title.replace(' ', "")),
        format!("{}{JSON_SUFFIX}", title.replace(' ', "_")),
    ]
}

fn first_existing(workspace: &Workspace, title: &str) -> Option<String> {
    candidate_filenames(title)
        .into_iter()
        .find(|filename| workspace.exists(filename))
}

/// Resolve against an already-loaded index, or `None` when no index is available.
pub fn resolve_with_index(
    workspace: &Workspace,
    index: Option<&BookIndex>,
    book: &str,
) -> Resolution {
    let base = base_title(book);

    if let Some(canonical) = index.and_then(|idx| idx.canonical_for(base)) {
        return match first_existing(workspace, canonical) {
            Some(filename) => Resolution {
                filename,
                source: ResolutionSource::IndexVariant,
            },
            None => Resolution {
                filename: format!("{canonical}{JSON_SUFFIX}"),
                source: ResolutionSource::IndexCanonical,
            },
        };
    }

    match first_existing(workspace, base) {
        Some(filename) => Resolution {
            filename,
            source: ResolutionSource::InputVariant,
        },
        None => Resolution {
            filename: format!("{base}{JSON_SUFFIX}"),
            source: ResolutionSource::Literal,
        },
    }
}

/// Load the index (if usable) and resolve `book` to a filename.
pub fn resolve_book(workspace: &Workspace, book: &str) -> Resolution {
    let index = match BookIndex::load(workspace) {
        Ok(index) => Some(index),
        Err(err) => {
            log::debug!("Book index unavailable, resolving from input only: {err}");
            None
        }
    };
    let resolution = resolve_with_index(workspace, index.as_ref(), book);
    log::debug!(
        "Resolved {book:?} -> {} ({:?})",
        resolution.filename,
        resolution.source
    );
    resolution
}

impl Workspace {
    pub fn list_books(&self) -> Result<Vec<String>> {
        Ok(BookIndex::load(self)?.into_books())
    }

    pub fn load_book(&self, book: &str) -> Result<Value> {
        let resolution = resolve_book(self, book);
        self.load_json(&resolution.filename)
    }
}
