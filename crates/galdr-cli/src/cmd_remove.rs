use std::path::Path;

use galdr_store::WorkspaceLock;

use crate::workspace;

pub fn execute(start: &Path, name: &str) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    let _lock = WorkspaceLock::acquire(&paths)?;
    let mut manager = workspace::open_manager(&paths, &config)?;

    if !manager.remove_trigger(name) {
        anyhow::bail!("no command trigger named `{name}`");
    }
    manager.flush();

    println!("Removed command trigger `{name}`");
    Ok(())
}
