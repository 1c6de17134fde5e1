pub mod callable;
pub mod completion;
pub mod host;
pub mod ledger;

pub use callable::{TriggerCallable, PLAYERS_ONLY_MESSAGE};
pub use host::{CommandMapping, CommandOutcome, CommandRegistry};
pub use ledger::{OverrideLedger, OverrideRecord};

use std::sync::Arc;

use galdr_core::Trigger;
use galdr_trigger::DispatchAdapter;
use tracing::{info, warn};

/// Adapter for hosts with a formal command registry: trigger names are
/// proactively claimed, displacing (and recording) whatever held them
/// before, and the host calls back into the installed callable for
/// execution, completion, and permission tests.
pub struct FormalRegistrationAdapter {
    registry: Box<dyn CommandRegistry>,
    overrides: OverrideLedger,
}

impl FormalRegistrationAdapter {
    pub fn new(registry: Box<dyn CommandRegistry>) -> Self {
        Self {
            registry,
            overrides: OverrideLedger::default(),
        }
    }

    /// The displaced bindings currently held by this adapter instance.
    pub fn overrides(&self) -> &OverrideLedger {
        &self.overrides
    }
}

impl DispatchAdapter for FormalRegistrationAdapter {
    fn register(&mut self, name: &str, trigger: &Trigger) -> anyhow::Result<bool> {
        let mut displaced = false;
        if let Some(prior) = self.registry.mapping(name) {
            self.registry.remove_mapping(&prior);
            self.overrides.record(name, prior);
            displaced = true;
            info!("displaced existing host binding for `{}`", name);
        }

        let mut names = vec![name.to_string()];
        names.extend(trigger.aliases().iter().cloned());

        let callable = Arc::new(TriggerCallable::new(name, trigger.clone()));
        if let Err(e) = self.registry.register(callable, &names) {
            if let Some(record) = self.overrides.take(name) {
                warn!(
                    "prior binding for `{}` (displaced at {}) is lost after a failed \
                     installation; restoration is not supported",
                    name, record.displaced_at
                );
            }
            return Err(e);
        }
        Ok(displaced)
    }

    fn unregister(&mut self, name: &str) -> anyhow::Result<bool> {
        let Some(mapping) = self.registry.mapping(name) else {
            return Ok(false);
        };
        let removed = self.registry.remove_mapping(&mapping);

        // TODO restore the displaced binding once the host clarifies
        // who owns a mapping whose plugin may since have unloaded.
        if let Some(record) = self.overrides.take(name) {
            warn!(
                "prior binding for `{}` (displaced at {}) is permanently superseded; \
                 restoration is not supported",
                name, record.displaced_at
            );
        }
        Ok(removed)
    }
}
