use std::sync::Arc;

use galdr_core::context::split_arguments;
use galdr_core::{permissions, CommandSender, CommandSource, ExecutionContext, Trigger};

use crate::completion;
use crate::host::CommandOutcome;

/// Fixed rejection sent to principals that cannot run triggers.
pub const PLAYERS_ONLY_MESSAGE: &str = "Command triggers work only for players.";

/// The callable installed into the host registry for one trigger.
/// Bound under the primary name and every alias; the host invokes it
/// for execution, completion, and permission tests.
pub struct TriggerCallable {
    name: String,
    trigger: Trigger,
}

impl TriggerCallable {
    pub fn new(name: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            name: name.into(),
            trigger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn trigger(&self) -> &Trigger {
        &self.trigger
    }

    /// Execute for one invocation. Non-player principals get the fixed
    /// rejection and no activation. The outcome is uniformly `Handled`;
    /// a runtime failure from the script is not caught here — it
    /// travels through the `Result` to the host's error-reporting path.
    pub fn process(
        &self,
        source: &CommandSource,
        arguments: &str,
    ) -> anyhow::Result<CommandOutcome> {
        let Some(player) = source.as_player() else {
            source.sender().send_message(PLAYERS_ONLY_MESSAGE);
            return Ok(CommandOutcome::Handled);
        };

        let args = split_arguments(arguments);
        let ctx = ExecutionContext::for_player(Arc::clone(player), &self.name, &args);
        self.trigger.activate(&ctx)?;
        Ok(CommandOutcome::Handled)
    }

    /// Positional completion against the trigger's declared completers.
    pub fn suggestions(&self, arguments: &str) -> Vec<String> {
        completion::suggest(&self.trigger, arguments)
    }

    /// Every declared permission must hold. Denial is the host's to
    /// report; this layer produces no diagnostic for it.
    pub fn test_permission(&self, source: &dyn CommandSender) -> bool {
        permissions::holds_all(source, self.trigger.permissions())
    }
}
