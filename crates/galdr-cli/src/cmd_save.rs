use std::path::Path;

use galdr_store::WorkspaceLock;

use crate::workspace;

pub fn execute(start: &Path) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    let _lock = WorkspaceLock::acquire(&paths)?;
    let manager = workspace::open_manager(&paths, &config)?;

    manager.save_all();
    manager.flush();

    println!("Saved {} command trigger(s)", manager.trigger_names().len());
    Ok(())
}
