use std::path::{Path, PathBuf};

/// All well-known paths under `.galdr/`.
#[derive(Debug, Clone)]
pub struct GaldrPaths {
    pub root: PathBuf,
    pub galdr_dir: PathBuf,
    pub triggers_dir: PathBuf,
    pub command_triggers_dir: PathBuf,
    pub config_json: PathBuf,
    pub lock_file: PathBuf,
}

impl GaldrPaths {
    /// Derive all paths from a workspace root. Pure computation, no I/O.
    pub fn discover(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let galdr_dir = root.join(".galdr");
        let triggers_dir = galdr_dir.join("triggers");
        Self {
            command_triggers_dir: triggers_dir.join("command"),
            config_json: galdr_dir.join("config.json"),
            lock_file: galdr_dir.join("LOCK"),
            triggers_dir,
            galdr_dir,
            root,
        }
    }

    /// Create all required directories. Idempotent.
    pub fn ensure_layout(&self) -> anyhow::Result<()> {
        for dir in [&self.triggers_dir, &self.command_triggers_dir] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// Check whether `.galdr/` exists.
    pub fn is_initialized(&self) -> bool {
        self.galdr_dir.is_dir()
    }

    /// Walk up from `start` looking for a directory containing `.galdr/`.
    /// Returns `None` if not found.
    pub fn find_root(start: &Path) -> Option<PathBuf> {
        let mut cur = start.to_path_buf();
        loop {
            if cur.join(".galdr").is_dir() {
                return Some(cur);
            }
            if !cur.pop() {
                return None;
            }
        }
    }
}
