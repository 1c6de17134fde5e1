use std::path::Path;

use crate::workspace;

pub fn execute(start: &Path) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    // Building the manager performs the reload; bad entries are logged
    // and skipped, never aborting the load.
    let manager = workspace::open_manager(&paths, &config)?;

    println!(
        "Reloaded {} command trigger(s) from {}",
        manager.trigger_names().len(),
        config.command_triggers_dir(&paths).display()
    );
    Ok(())
}
