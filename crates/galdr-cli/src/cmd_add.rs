use std::path::Path;

use galdr_store::WorkspaceLock;

use crate::console::ConsoleSender;
use crate::workspace;

pub fn execute(
    start: &Path,
    name: &str,
    script: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let source = match (script, file) {
        (Some(script), None) => script.to_string(),
        (None, Some(file)) => std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", file.display(), e))?,
        _ => anyhow::bail!("give the script with exactly one of --script or --file"),
    };

    let (paths, config) = workspace::open(start)?;
    let _lock = WorkspaceLock::acquire(&paths)?;
    let mut manager = workspace::open_manager(&paths, &config)?;

    if !manager.add_trigger(&ConsoleSender, name, &source) {
        anyhow::bail!("could not add command trigger `{name}` (already bound?)");
    }
    manager.flush();

    println!("Added command trigger `{name}`");
    Ok(())
}
