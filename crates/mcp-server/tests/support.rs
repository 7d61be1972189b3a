#![allow(dead_code)]

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn locate_kjv_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_kjv-mcp") {
        return Ok(PathBuf::from(path));
    }

    // Cargo doesn't always expose CARGO_BIN_EXE_* at runtime. Derive it from the test exe path:
    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/kjv-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("kjv-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/kjv-mcp", "target/release/kjv-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate kjv-mcp binary; build with: cargo build -p kjv-mcp")
}

/// Server command running inside `workdir` with no root override.
pub fn server_command(workdir: &Path) -> Result<tokio::process::Command> {
    let mut cmd = tokio::process::Command::new(locate_kjv_mcp_bin()?);
    cmd.current_dir(workdir);
    cmd.env_remove("KJV_ROOT");
    cmd.env("RUST_LOG", "warn");
    Ok(cmd)
}

pub const GENESIS: &str = r#"{
  "book": "Genesis",
  "chapters": [
    {
      "chapter": "1",
      "verses": [
        { "verse": "1", "text": "In the beginning God created the heaven and the earth." },
        { "verse": "2", "text": "And the earth was without form, and void;" }
      ]
    }
  ]
}"#;

/// Small corpus: index, Genesis, 1John (no-space file), chapter counts.
pub fn write_corpus() -> Result<TempDir> {
    let tmp = tempfile::tempdir().context("tempdir")?;
    let root = tmp.path();
    std::fs::write(root.join("Books.json"), r#"["Genesis", "Exodus", "1John"]"#)
        .context("write Books.json")?;
    std::fs::write(root.join("Genesis.json"), GENESIS).context("write Genesis.json")?;
    std::fs::write(
        root.join("1John.json"),
        r#"{"book":"1 John","chapters":[{"chapter":"1","verses":[]}]}"#,
    )
    .context("write 1John.json")?;
    std::fs::write(
        root.join("bible_book_chapters.json"),
        r#"[{"book":"Genesis","chapters":50},{"book":"Exodus","chapters":40}]"#,
    )
    .context("write bible_book_chapters.json")?;
    Ok(tmp)
}
