use std::path::Path;

use galdr_trigger::lock_shared;

use crate::workspace;

pub fn execute(start: &Path, name: &str) -> anyhow::Result<()> {
    let (paths, config) = workspace::open(start)?;
    let manager = workspace::open_manager(&paths, &config)?;

    let store = lock_shared(manager.store());
    let Some(trigger) = store.get(name) else {
        anyhow::bail!("no command trigger named `{name}`");
    };

    if !trigger.aliases().is_empty() {
        println!("# aliases: {}", trigger.aliases().join(", "));
    }
    if !trigger.permissions().is_empty() {
        println!("# permissions: {}", trigger.permissions().join(", "));
    }
    print!("{}", trigger.source());
    if !trigger.source().ends_with('\n') {
        println!();
    }
    Ok(())
}
