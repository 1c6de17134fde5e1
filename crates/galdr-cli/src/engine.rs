use std::sync::Arc;

use galdr_core::context::var;
use galdr_core::script::{CompiledScript, ParseError, ScriptEngine};
use galdr_core::ExecutionContext;
use tracing::info;

/// Stand-in engine used until a real script engine is bound: accepts
/// any source, declares no aliases, permissions, or completers, and
/// logs activations instead of executing anything.
pub struct PlainScriptEngine;

impl ScriptEngine for PlainScriptEngine {
    fn compile(&self, _source: &str) -> Result<Arc<dyn CompiledScript>, ParseError> {
        Ok(Arc::new(PlainScript))
    }
}

struct PlainScript;

impl CompiledScript for PlainScript {
    fn activate(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
        let command = ctx
            .var(var::COMMAND)
            .and_then(|v| v.as_str())
            .unwrap_or("?");
        info!("activated `{}` for {}", command, ctx.invoker().name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galdr_core::{CommandSender, Player};
    use uuid::Uuid;

    struct FakePlayer;

    impl CommandSender for FakePlayer {
        fn name(&self) -> &str {
            "alice"
        }
        fn has_permission(&self, _node: &str) -> bool {
            true
        }
        fn send_message(&self, _message: &str) {}
    }

    impl Player for FakePlayer {
        fn unique_id(&self) -> Uuid {
            Uuid::nil()
        }
    }

    #[test]
    fn accepts_any_source_and_activates() {
        let script = PlainScriptEngine.compile("anything at all").unwrap();
        let ctx = ExecutionContext::for_player(Arc::new(FakePlayer), "warp", &[]);
        script.activate(&ctx).unwrap();
        assert!(script.aliases().is_empty());
        assert!(script.permissions().is_empty());
        assert!(script.tab_completers().is_empty());
    }
}
