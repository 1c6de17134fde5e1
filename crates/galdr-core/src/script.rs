use std::sync::Arc;

use crate::completer::TabCompleter;
use crate::context::ExecutionContext;

/// Raised when script source fails to compile.
///
/// The message is safe to forward to the requesting invoker; anything
/// sensitive stays in the engine's own diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The external script engine. Compilation is the only entry point;
/// everything else this layer needs lives on the compiled script.
pub trait ScriptEngine: Send + Sync {
    fn compile(&self, source: &str) -> Result<Arc<dyn CompiledScript>, ParseError>;
}

/// A successfully compiled script, ready for repeated activation.
///
/// `activate` runs synchronously on the host's command-processing
/// context. A runtime failure is returned as-is — this layer never
/// catches or translates it; it propagates to the host's own
/// error-reporting path.
pub trait CompiledScript: Send + Sync {
    fn activate(&self, ctx: &ExecutionContext) -> anyhow::Result<()>;

    /// Additional names that resolve to the same script.
    fn aliases(&self) -> &[String] {
        &[]
    }

    /// Permission nodes that must all hold for the invoker.
    fn permissions(&self) -> &[String] {
        &[]
    }

    /// Per-argument-position completers; a position beyond the declared
    /// length has no completer.
    fn tab_completers(&self) -> &[Option<TabCompleter>] {
        &[]
    }
}
