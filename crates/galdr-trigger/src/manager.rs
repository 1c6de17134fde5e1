use std::sync::Arc;

use galdr_core::{CommandSender, Trigger};
use tracing::{debug, error, info, warn};

use crate::adapter::DispatchAdapter;
use crate::persist::PersistenceWorker;
use crate::store::{lock_shared, SharedTriggerStore};

/// Orchestrates the trigger store, one dispatch adapter, and deferred
/// persistence. This is the interface the admin-facing surface talks
/// to; the host only ever reaches triggers through the adapter.
///
/// All state is private to the instance: independent managers (and
/// tests) never interfere with one another.
pub struct CommandTriggerManager {
    store: SharedTriggerStore,
    adapter: Box<dyn DispatchAdapter>,
    persist: PersistenceWorker,
    installed: Vec<String>,
}

impl CommandTriggerManager {
    /// Build a manager over a shared store and one dispatch adapter,
    /// then load every persisted trigger and install it with the host.
    pub fn new(
        store: SharedTriggerStore,
        adapter: Box<dyn DispatchAdapter>,
    ) -> anyhow::Result<Self> {
        {
            let guard = lock_shared(&store);
            std::fs::create_dir_all(guard.folder())?;
        }
        let persist = PersistenceWorker::spawn(Arc::clone(&store))?;
        let mut manager = Self {
            store,
            adapter,
            persist,
            installed: Vec::new(),
        };
        manager.reload();
        Ok(manager)
    }

    /// Bind `name` to `source`. Returns `false` — with a diagnostic to
    /// `invoker` on compile failure — if the name is already claimed or
    /// the script does not compile; nothing is mutated in that case.
    /// On success a persistence pass is scheduled asynchronously.
    pub fn add_trigger(&mut self, invoker: &dyn CommandSender, name: &str, source: &str) -> bool {
        let trigger = {
            let mut store = lock_shared(&self.store);
            match store.add(invoker, name, source) {
                Ok(trigger) => trigger,
                Err(e) => {
                    debug!("rejected trigger add for `{}`: {}", name, e);
                    return false;
                }
            }
        };
        self.install(name, &trigger);
        self.persist.schedule_save();
        true
    }

    /// Unbind `name`. Returns `false` if it was not bound; otherwise
    /// the binding is removed, its file deleted best-effort, and a
    /// persistence pass scheduled asynchronously.
    pub fn remove_trigger(&mut self, name: &str) -> bool {
        {
            let mut store = lock_shared(&self.store);
            if let Err(e) = store.remove(name) {
                debug!("rejected trigger removal: {}", e);
                return false;
            }
        }
        if let Err(e) = self.adapter.unregister(name) {
            warn!("host unregistration for `{}` failed: {:#}", name, e);
        }
        self.installed.retain(|n| n != name);
        self.persist.schedule_save();
        true
    }

    pub fn has_trigger(&self, name: &str) -> bool {
        lock_shared(&self.store).has(name)
    }

    /// Bound primary names, sorted.
    pub fn trigger_names(&self) -> Vec<String> {
        lock_shared(&self.store).names()
    }

    /// Rebuild from disk: release every installed name, reload the
    /// store, and install the freshly loaded set. Alias sets are
    /// claimed and released per trigger as one unit.
    pub fn reload(&mut self) {
        for name in std::mem::take(&mut self.installed) {
            if let Err(e) = self.adapter.unregister(&name) {
                warn!("host unregistration for `{}` failed during reload: {:#}", name, e);
            }
        }

        let triggers: Vec<Trigger> = {
            let mut store = lock_shared(&self.store);
            store.reload();
            store
                .names()
                .iter()
                .filter_map(|n| store.get(n).cloned())
                .collect()
        };

        for trigger in triggers {
            let name = trigger.name().to_string();
            self.install(&name, &trigger);
        }
    }

    /// Schedule an asynchronous persistence pass over every trigger.
    /// The caller is never blocked on disk I/O.
    pub fn save_all(&self) {
        self.persist.schedule_save();
    }

    /// Block until scheduled persistence has drained. For shutdown
    /// paths that must not lose writes.
    pub fn flush(&self) {
        self.persist.flush();
    }

    pub fn store(&self) -> &SharedTriggerStore {
        &self.store
    }

    fn install(&mut self, name: &str, trigger: &Trigger) {
        match self.adapter.register(name, trigger) {
            Ok(true) => info!("trigger `{}` displaced an existing host binding", name),
            Ok(false) => {}
            Err(e) => error!("host registration for `{}` failed: {:#}", name, e),
        }
        self.installed.push(name.to_string());
    }
}
