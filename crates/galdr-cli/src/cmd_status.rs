use std::path::Path;

use crate::workspace;

pub fn execute(start: &Path) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    let manager = workspace::open_manager(&paths, &config)?;
    let names = manager.trigger_names();

    println!("Workspace: {}", paths.root.display());
    println!("Triggers:  {}", config.command_triggers_dir(&paths).display());
    println!("Bound:     {}", names.len());
    for name in names {
        println!("  {name}");
    }
    Ok(())
}
