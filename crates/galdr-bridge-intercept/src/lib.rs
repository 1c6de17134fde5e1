pub mod host;

pub use host::{CommandInput, HookPriority};

use std::sync::Arc;

use galdr_core::{ExecutionContext, Trigger};
use galdr_trigger::{lock_shared, DispatchAdapter, SharedTriggerStore};
use tracing::debug;

/// Adapter for hosts that expose their raw command input as an
/// observable stream instead of a command registry.
///
/// The host wires `on_command_input` once, at `OBSERVE_PRIORITY`, into
/// its input pipeline. Matching input is executed and marked handled so
/// the native pipeline never sees it; everything else passes through
/// untouched. This adapter never claims names with the host, so
/// displacement and restoration do not apply — priority ordering alone
/// achieves pre-emption.
pub struct EventInterceptionAdapter {
    store: SharedTriggerStore,
}

impl EventInterceptionAdapter {
    /// Priority at which the host should deliver raw command input.
    pub const OBSERVE_PRIORITY: HookPriority = HookPriority::Highest;

    pub fn new(store: SharedTriggerStore) -> Self {
        Self { store }
    }

    /// Observe one item of raw command input. Tokenizes, strips the
    /// leading command marker, and looks the first token up in the
    /// trigger store (primary names and aliases). A runtime failure
    /// from the script propagates to the host's error path; the input
    /// is only marked handled after a completed activation.
    pub fn on_command_input(&self, input: &mut CommandInput) -> anyhow::Result<()> {
        let mut tokens = input.message().split(' ');
        let first = tokens.next().unwrap_or("");
        let command = first.strip_prefix('/').unwrap_or(first);
        if command.is_empty() {
            return Ok(());
        }

        let trigger: Option<Trigger> = {
            let store = lock_shared(&self.store);
            store.lookup(command).cloned()
        };
        let Some(trigger) = trigger else {
            return Ok(());
        };

        let args: Vec<String> = tokens.map(str::to_string).collect();
        debug!("intercepted `{}` for {}", command, input.player().name());

        let ctx = ExecutionContext::for_player(Arc::clone(input.player()), command, &args);
        trigger.activate(&ctx)?;
        input.mark_handled();
        Ok(())
    }
}

impl DispatchAdapter for EventInterceptionAdapter {
    /// Interception claims nothing with the host; nothing is displaced.
    fn register(&mut self, _name: &str, _trigger: &Trigger) -> anyhow::Result<bool> {
        Ok(false)
    }

    fn unregister(&mut self, _name: &str) -> anyhow::Result<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use galdr_core::context::var;
    use galdr_core::script::{CompiledScript, ParseError, ScriptEngine};
    use galdr_core::{CommandSender, Player};
    use std::sync::Mutex;
    use uuid::Uuid;

    struct FakePlayer {
        name: String,
        id: Uuid,
    }

    impl CommandSender for FakePlayer {
        fn name(&self) -> &str {
            &self.name
        }
        fn has_permission(&self, _node: &str) -> bool {
            true
        }
        fn send_message(&self, _message: &str) {}
    }

    impl Player for FakePlayer {
        fn unique_id(&self) -> Uuid {
            self.id
        }
    }

    /// Script that records the bindings of every activation.
    struct RecordingScript {
        aliases: Vec<String>,
        activations: Arc<Mutex<Vec<galdr_core::VarMap>>>,
        fail: bool,
    }

    impl CompiledScript for RecordingScript {
        fn activate(&self, ctx: &ExecutionContext) -> anyhow::Result<()> {
            self.activations.lock().unwrap().push(ctx.vars().clone());
            if self.fail {
                anyhow::bail!("script blew up");
            }
            Ok(())
        }
        fn aliases(&self) -> &[String] {
            &self.aliases
        }
    }

    struct RecordingEngine {
        activations: Arc<Mutex<Vec<galdr_core::VarMap>>>,
    }

    impl ScriptEngine for RecordingEngine {
        fn compile(&self, source: &str) -> Result<Arc<dyn CompiledScript>, ParseError> {
            let aliases = source
                .lines()
                .filter_map(|l| l.strip_prefix("alias "))
                .map(str::to_string)
                .collect();
            Ok(Arc::new(RecordingScript {
                aliases,
                activations: Arc::clone(&self.activations),
                fail: source.contains("FAIL"),
            }))
        }
    }

    struct Silent;

    impl CommandSender for Silent {
        fn name(&self) -> &str {
            "console"
        }
        fn has_permission(&self, _node: &str) -> bool {
            true
        }
        fn send_message(&self, _message: &str) {}
    }

    fn setup(
        dir: &std::path::Path,
    ) -> (EventInterceptionAdapter, Arc<Mutex<Vec<galdr_core::VarMap>>>) {
        let activations = Arc::new(Mutex::new(Vec::new()));
        let store = galdr_trigger::TriggerStore::shared(
            dir,
            Arc::new(RecordingEngine {
                activations: Arc::clone(&activations),
            }),
        );
        (EventInterceptionAdapter::new(store), activations)
    }

    fn player(name: &str) -> Arc<dyn Player> {
        Arc::new(FakePlayer {
            name: name.to_string(),
            id: Uuid::new_v4(),
        })
    }

    fn add(adapter: &EventInterceptionAdapter, name: &str, source: &str) {
        lock_shared(&adapter.store).add(&Silent, name, source).unwrap();
    }

    #[test]
    fn matching_input_activates_and_is_handled() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, activations) = setup(tmp.path());
        add(&adapter, "warp", "#TELEPORT");

        let mut input = CommandInput::new(player("alice"), "/warp north 3");
        adapter.on_command_input(&mut input).unwrap();

        assert!(input.is_handled());
        let activations = activations.lock().unwrap();
        assert_eq!(activations.len(), 1);
        let vars = &activations[0];
        assert_eq!(vars[var::PLAYER], "alice");
        assert_eq!(vars[var::COMMAND], "warp");
        assert_eq!(vars[var::ARGS], serde_json::json!(["north", "3"]));
        assert_eq!(vars[var::ARGS_LENGTH], 2);
    }

    #[test]
    fn unmatched_input_is_left_untouched() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, activations) = setup(tmp.path());
        add(&adapter, "warp", "#TELEPORT");

        let mut input = CommandInput::new(player("alice"), "/home");
        adapter.on_command_input(&mut input).unwrap();

        assert!(!input.is_handled());
        assert!(activations.lock().unwrap().is_empty());
    }

    #[test]
    fn aliases_resolve_like_the_primary_name() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, activations) = setup(tmp.path());
        add(&adapter, "warp", "alias w");

        let mut input = CommandInput::new(player("alice"), "/w north");
        adapter.on_command_input(&mut input).unwrap();

        assert!(input.is_handled());
        let activations = activations.lock().unwrap();
        assert_eq!(activations[0][var::COMMAND], "w");
    }

    #[test]
    fn only_the_leading_marker_is_stripped() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, activations) = setup(tmp.path());
        add(&adapter, "warp", "#TELEPORT");

        let mut input = CommandInput::new(player("alice"), "/warp a/b");
        adapter.on_command_input(&mut input).unwrap();

        let activations = activations.lock().unwrap();
        assert_eq!(activations[0][var::ARGS], serde_json::json!(["a/b"]));
    }

    #[test]
    fn runtime_failure_propagates_and_leaves_input_unhandled() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, _) = setup(tmp.path());
        add(&adapter, "warp", "FAIL");

        let mut input = CommandInput::new(player("alice"), "/warp");
        let err = adapter.on_command_input(&mut input).unwrap_err();
        assert!(err.to_string().contains("script blew up"));
        assert!(!input.is_handled());
    }

    #[test]
    fn empty_message_passes_through() {
        let tmp = tempfile::tempdir().unwrap();
        let (adapter, _) = setup(tmp.path());

        let mut input = CommandInput::new(player("alice"), "/");
        adapter.on_command_input(&mut input).unwrap();
        assert!(!input.is_handled());
    }

    #[test]
    fn adapter_claims_nothing_with_the_host() {
        let tmp = tempfile::tempdir().unwrap();
        let (mut adapter, _) = setup(tmp.path());
        add(&adapter, "warp", "#TELEPORT");
        let trigger = lock_shared(&adapter.store).get("warp").unwrap().clone();

        assert!(!adapter.register("warp", &trigger).unwrap());
        assert!(adapter.unregister("warp").unwrap());
    }
}
