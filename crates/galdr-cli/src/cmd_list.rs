use std::path::Path;

use crate::workspace;

pub fn execute(start: &Path) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    let manager = workspace::open_manager(&paths, &config)?;

    let names = manager.trigger_names();
    if names.is_empty() {
        println!("No command triggers bound.");
        return Ok(());
    }
    for name in &names {
        println!("{name}");
    }
    println!("{} command trigger(s)", names.len());
    Ok(())
}
