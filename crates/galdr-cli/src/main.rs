mod cmd_add;
mod cmd_init;
mod cmd_list;
mod cmd_reload;
mod cmd_remove;
mod cmd_save;
mod cmd_show;
mod cmd_status;
mod console;
mod engine;
mod workspace;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "galdr", version, about = "Command triggers for scriptable hosts")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Initialize a new .galdr/ workspace
    Init,
    /// Bind a command name to a script
    Add {
        /// Command name to bind
        name: String,
        /// Script source given inline
        #[arg(long, conflicts_with = "file")]
        script: Option<String>,
        /// Read the script source from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Unbind a command name and delete its persisted script
    Remove {
        /// Command name to unbind
        name: String,
    },
    /// List bound command names
    List,
    /// Print the script source bound to a command
    Show {
        /// Command name
        name: String,
    },
    /// Rebuild the binding set from disk, reporting what loaded
    Reload,
    /// Persist every bound trigger to its file
    Save,
    /// Show workspace status
    Status,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.cmd {
        Command::Init => cmd_init::execute(&cwd),
        Command::Add { name, script, file } => {
            cmd_add::execute(&cwd, &name, script.as_deref(), file.as_deref())
        }
        Command::Remove { name } => cmd_remove::execute(&cwd, &name),
        Command::List => cmd_list::execute(&cwd),
        Command::Show { name } => cmd_show::execute(&cwd, &name),
        Command::Reload => cmd_reload::execute(&cwd),
        Command::Save => cmd_save::execute(&cwd),
        Command::Status => cmd_status::execute(&cwd),
    }
}
