use std::sync::Arc;

use crate::callable::TriggerCallable;

/// Outcome reported to the host after a callable runs. Uniformly
/// `Handled`, irrespective of what the script did internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Handled,
}

/// Opaque handle to a binding installed in the host's command
/// registry — ours or anybody else's. Sufficient to attempt a later
/// restoration, if the host ever supports one.
pub trait CommandMapping: Send + Sync {
    /// Primary name this mapping answers to.
    fn primary_name(&self) -> &str;
}

/// The host's command registry, as much of it as this adapter needs.
pub trait CommandRegistry: Send {
    /// Current mapping for `name`, if any.
    fn mapping(&self, name: &str) -> Option<Arc<dyn CommandMapping>>;

    /// Release a mapping from the registry. Returns whether it was
    /// present.
    fn remove_mapping(&mut self, mapping: &Arc<dyn CommandMapping>) -> bool;

    /// Install a callable under every given name at once — the names
    /// are claimed as a single atomic unit.
    fn register(
        &mut self,
        callable: Arc<TriggerCallable>,
        names: &[String],
    ) -> anyhow::Result<Arc<dyn CommandMapping>>;
}
