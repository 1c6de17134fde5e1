use std::fmt;
use std::sync::Arc;

use crate::completer::TabCompleter;
use crate::context::ExecutionContext;
use crate::script::{CompiledScript, ParseError, ScriptEngine};

/// A named, persistent script binding.
///
/// The source is immutable once compiled; edits replace the whole
/// Trigger. Cloning is a plain value copy — the source and compiled
/// script are shared, never re-parsed.
#[derive(Clone)]
pub struct Trigger {
    name: String,
    source: Arc<str>,
    script: Arc<dyn CompiledScript>,
}

impl Trigger {
    /// Compile `source` with the given engine and bind it under `name`.
    pub fn compile(
        engine: &dyn ScriptEngine,
        name: impl Into<String>,
        source: &str,
    ) -> Result<Self, ParseError> {
        let script = engine.compile(source)?;
        Ok(Self {
            name: name.into(),
            source: Arc::from(source),
            script,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn aliases(&self) -> &[String] {
        self.script.aliases()
    }

    pub fn permissions(&self) -> &[String] {
        self.script.permissions()
    }

    pub fn tab_completers(&self) -> &[Option<TabCompleter>] {
        self.script.tab_completers()
    }

    /// The primary name plus every alias, in declaration order. These
    /// are claimed and released as one atomic unit.
    pub fn all_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(1 + self.aliases().len());
        names.push(self.name.clone());
        names.extend(self.aliases().iter().cloned());
        names
    }

    /// True if `name` is the primary name or one of the aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.name == name || self.aliases().iter().any(|a| a == name)
    }

    /// Run the script. Runtime failures propagate untouched.
    pub fn activate(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        self.script.activate(ctx)
    }

    /// Rebuild the compiled form from the stored source. Duplication is
    /// a plain clone; recompilation is this separate, explicit step.
    pub fn recompile(&self, engine: &dyn ScriptEngine) -> Result<Self, ParseError> {
        let script = engine.compile(&self.source)?;
        Ok(Self {
            name: self.name.clone(),
            source: Arc::clone(&self.source),
            script,
        })
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("name", &self.name)
            .field("aliases", &self.aliases())
            .field("permissions", &self.permissions())
            .field("source_len", &self.source.len())
            .finish()
    }
}
