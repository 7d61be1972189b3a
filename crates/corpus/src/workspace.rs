use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an extra root searched before the working directory.
pub const ROOT_ENV: &str = "KJV_ROOT";

/// Ordered set of directories searched for corpus files.
///
/// Earlier roots shadow later ones. When a file exists under none of them, the path under the
/// last root is handed back unchecked so the caller can report what it expected to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut out: Vec<PathBuf> = Vec::new();
        for root in roots {
            let root = root.into();
            if out.last() != Some(&root) {
                out.push(root);
            }
        }
        Self { roots: out }
    }

    /// Default roots: `KJV_ROOT` (if set), the current directory, then the executable's directory.
    pub fn discover() -> Self {
        Self::discover_with(None)
    }

    /// Like [`Workspace::discover`], with an explicit override taking the place of `KJV_ROOT`.
    pub fn discover_with(root_override: Option<PathBuf>) -> Self {
        let root_override = root_override.or_else(env_root_override);
        let cwd = env::current_dir().ok();
        let exe_dir = env::current_exe().ok().as_deref().and_then(exe_parent_dir);
        let workspace = Self::new(root_override.into_iter().chain(cwd).chain(exe_dir));
        log::debug!("Workspace roots: {:?}", workspace.roots);
        workspace
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Path for `filename` under the first root that contains it, else under the last root.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        for root in &self.roots {
            let candidate = root.join(filename);
            if candidate.exists() {
                return candidate;
            }
        }
        match self.roots.last() {
            Some(root) => root.join(filename),
            None => PathBuf::from(filename),
        }
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.resolve(filename).exists()
    }
}

fn env_root_override() -> Option<PathBuf> {
    let value = env::var(ROOT_ENV).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

fn exe_parent_dir(exe: &Path) -> Option<PathBuf> {
    let exe = exe.canonicalize().unwrap_or_else(|_| exe.to_path_buf());
    exe.parent().map(Path::to_path_buf)
}
