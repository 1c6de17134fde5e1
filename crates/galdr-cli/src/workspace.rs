use std::path::Path;
use std::sync::Arc;

use galdr_bridge_intercept::EventInterceptionAdapter;
use galdr_store::{GaldrConfig, GaldrPaths};
use galdr_trigger::{CommandTriggerManager, TriggerStore};

use crate::engine::PlainScriptEngine;

/// Locate the enclosing workspace: walk up from `start`, then fall
/// back to the per-user store root if that one is initialized.
pub fn open(start: &Path) -> anyhow::Result<(GaldrPaths, GaldrConfig)> {
    let root = GaldrPaths::find_root(start)
        .or_else(|| {
            let root = galdr_store::store_root();
            GaldrPaths::discover(&root).is_initialized().then_some(root)
        })
        .ok_or_else(|| {
            anyhow::anyhow!(
                "not a galdr workspace ({}/.galdr not found). Run `galdr init` first.",
                start.display()
            )
        })?;
    let paths = GaldrPaths::discover(root);
    let config = GaldrConfig::load(&paths)?;
    Ok((paths, config))
}

/// Build a manager over the workspace's trigger directory. The CLI has
/// no live host, so the passive interception adapter (which claims
/// nothing) fills the adapter slot, and the stand-in engine compiles.
pub fn open_manager(
    paths: &GaldrPaths,
    config: &GaldrConfig,
) -> anyhow::Result<CommandTriggerManager> {
    let dir = config.command_triggers_dir(paths);
    let store = TriggerStore::shared(dir, Arc::new(PlainScriptEngine));
    let adapter = EventInterceptionAdapter::new(Arc::clone(&store));
    CommandTriggerManager::new(store, Box::new(adapter))
}
