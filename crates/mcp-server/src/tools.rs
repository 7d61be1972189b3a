//! MCP tools for the KJV corpus
//!
//! Three read-only lookups, each a thin composition of the corpus library.

use kjv_corpus::{resolve_book, Workspace};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Local King James Version corpus. Use 'list_books' for the canonical \
book names, 'get_book_json' with a book name (e.g. \"Genesis\", \"1 John\", \"1John.json\") for \
that book's verbatim JSON, and 'get_books_chapter_count' for chapter counts per book.";

/// KJV MCP Service
#[derive(Clone)]
pub struct BibleService {
    /// Roots searched for corpus files, fixed for the process lifetime
    workspace: Arc<Workspace>,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl BibleService {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(workspace),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for BibleService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Tool Input Schemas
// ============================================================================

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct GetBookRequest {
    /// Book name or filename
    #[schemars(
        description = "Book title (e.g. \"Genesis\", \"1 John\") or filename (e.g. \"1John.json\"); case and spacing are flexible"
    )]
    pub book: String,
}

fn json_result(value: &impl Serialize) -> CallToolResult {
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value).unwrap_or_default(),
    )])
}

fn error_result(tool: &str, err: impl std::fmt::Display) -> CallToolResult {
    log::warn!("{tool} failed: {err}");
    CallToolResult::error(vec![Content::text(format!("Error: {err}"))])
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl BibleService {
    /// List canonical book names
    #[tool(description = "Return the list of available book names from Books.json, in canonical order.")]
    pub async fn list_books(&self) -> Result<CallToolResult, McpError> {
        match self.workspace.list_books() {
            Ok(books) => Ok(json_result(&books)),
            Err(e) => Ok(error_result("list_books", e)),
        }
    }

    /// Verbatim JSON for one book
    #[tool(description = "Return the verbatim JSON content for the specified book. Input may be a book title (e.g. \"Genesis\", \"1 John\") or a filename (e.g. \"Genesis.json\"); output is the parsed JSON exactly as stored on disk.")]
    pub async fn get_book_json(
        &self,
        Parameters(request): Parameters<GetBookRequest>,
    ) -> Result<CallToolResult, McpError> {
        let resolution = resolve_book(&self.workspace, &request.book);
        match self.workspace.load_json(&resolution.filename) {
            Ok(value) => Ok(json_result(&value)),
            Err(e) => Ok(error_result("get_book_json", e)),
        }
    }

    /// Chapter counts for every book
    #[tool(description = "Return the verbatim JSON content of bible_book_chapters.json (chapter counts per book).")]
    pub async fn get_books_chapter_count(&self) -> Result<CallToolResult, McpError> {
        match self.workspace.load_chapter_counts() {
            Ok(value) => Ok(json_result(&value)),
            Err(e) => Ok(error_result("get_books_chapter_count", e)),
        }
    }
}
