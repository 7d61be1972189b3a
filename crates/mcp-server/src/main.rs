//! KJV Local JSON MCP Server
//!
//! Serves a directory of per-book KJV JSON files to AI agents over the MCP protocol (stdio).
//!
//! ## Tools
//!
//! - `list_books` - Canonical book names from `Books.json`, in order
//! - `get_book_json` - Verbatim JSON for one book ("Genesis", "1 John", "1John.json", ...)
//! - `get_books_chapter_count` - Verbatim `bible_book_chapters.json`
//!
//! ## Usage
//!
//! Run from the corpus directory (or set `KJV_ROOT`), then add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "kjv-local-json": {
//!       "command": "kjv-mcp"
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use kjv_corpus::Workspace;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::BibleService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let workspace = Workspace::discover();
    log::info!(
        "Starting KJV MCP server (roots: {:?})",
        workspace.roots()
    );

    let service = BibleService::new(workspace);
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("KJV MCP server stopped");
    Ok(())
}
