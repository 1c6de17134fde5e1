use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths::GaldrPaths;

/// Workspace settings from `.galdr/config.json`.
/// Unknown keys are ignored so older binaries tolerate newer files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GaldrConfig {
    /// Override for the command trigger directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers_dir: Option<PathBuf>,
}

impl GaldrConfig {
    /// Load config; a missing file yields the defaults.
    pub fn load(paths: &GaldrPaths) -> anyhow::Result<Self> {
        if !paths.config_json.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&paths.config_json)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }

    pub fn save(&self, paths: &GaldrPaths) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        crate::write_atomic(&paths.config_json, json.as_bytes())
    }

    /// Resolve the command trigger directory: the configured override,
    /// or `.galdr/triggers/command/`.
    pub fn command_triggers_dir(&self, paths: &GaldrPaths) -> PathBuf {
        match &self.triggers_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => paths.root.join(dir),
            None => paths.command_triggers_dir.clone(),
        }
    }
}
