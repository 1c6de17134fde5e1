use std::path::Path;

use galdr_store::{GaldrConfig, GaldrPaths};

pub fn execute(root: &Path) -> anyhow::Result<()> {
    let paths = GaldrPaths::discover(root);

    if paths.is_initialized() {
        // Ensure the layout is complete even if .galdr/ was partially created
        paths.ensure_layout()?;
        println!("Already initialized at {}", paths.galdr_dir.display());
        return Ok(());
    }

    paths.ensure_layout()?;
    if !paths.config_json.exists() {
        GaldrConfig::default().save(&paths)?;
    }

    println!("Initialized {}", paths.galdr_dir.display());
    println!("  trigger scripts go in {}", paths.command_triggers_dir.display());
    Ok(())
}
