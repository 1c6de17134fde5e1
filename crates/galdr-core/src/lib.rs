pub mod completer;
pub mod context;
pub mod error;
pub mod permissions;
pub mod script;
pub mod sender;
pub mod trigger;

pub use completer::TabCompleter;
pub use context::{ExecutionContext, VarMap};
pub use error::TriggerError;
pub use script::{CompiledScript, ParseError, ScriptEngine};
pub use sender::{CommandSender, CommandSource, Player};
pub use trigger::Trigger;
