pub mod config;
pub mod lock;
pub mod paths;

pub use config::GaldrConfig;
pub use lock::WorkspaceLock;
pub use paths::GaldrPaths;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Return the per-user store root: the platform data dir plus `galdr/`,
/// falling back to `~/.galdr/`. `GALDR_HOME` overrides both.
pub fn store_root() -> PathBuf {
    if let Ok(home) = std::env::var("GALDR_HOME") {
        if !home.is_empty() {
            return PathBuf::from(home);
        }
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("galdr")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".galdr")
    } else {
        PathBuf::from(".galdr-store")
    }
}

/// Atomic write: write to a temp file in the same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_root_is_not_empty() {
        let root = store_root();
        assert!(!root.as_os_str().is_empty());
    }

    #[test]
    fn write_atomic_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("warp");
        write_atomic(&path, b"#TELEPORT").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#TELEPORT");
    }

    #[test]
    fn write_atomic_replaces_existing_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("warp");
        write_atomic(&path, b"old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
