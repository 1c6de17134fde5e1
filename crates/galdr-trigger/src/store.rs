use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use galdr_core::{CommandSender, ScriptEngine, Trigger, TriggerError};
use tracing::{error, warn};

/// The trigger store shared between the manager, the persistence
/// worker, and (for the interception model) the dispatch path. All
/// access goes through the one mutex — never rely on a host being
/// single-threaded.
pub type SharedTriggerStore = Arc<Mutex<TriggerStore>>;

/// Lock a shared store, recovering the data from a poisoned mutex.
pub fn lock_shared(store: &SharedTriggerStore) -> MutexGuard<'_, TriggerStore> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Owns the live command-name → Trigger map, backed by one file per
/// command in a dedicated directory.
pub struct TriggerStore {
    folder: PathBuf,
    engine: Arc<dyn ScriptEngine>,
    triggers: HashMap<String, Trigger>,
}

impl TriggerStore {
    pub fn new(folder: impl Into<PathBuf>, engine: Arc<dyn ScriptEngine>) -> Self {
        Self {
            folder: folder.into(),
            engine,
            triggers: HashMap::new(),
        }
    }

    pub fn shared(folder: impl Into<PathBuf>, engine: Arc<dyn ScriptEngine>) -> SharedTriggerStore {
        Arc::new(Mutex::new(Self::new(folder, engine)))
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Rebuild the in-memory set from disk: a non-recursive scan where
    /// every readable, parsable file becomes a trigger named after it.
    /// A bad entry is logged and skipped; the scan never aborts.
    /// Afterwards the set equals exactly the successfully-parsed subset.
    pub fn reload(&mut self) {
        self.triggers.clear();

        let entries = match fs::read_dir(&self.folder) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "cannot scan trigger directory {}: {}",
                    self.folder.display(),
                    e
                );
                return;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("unreadable directory entry skipped: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                warn!("non-UTF-8 trigger filename skipped: {}", path.display());
                continue;
            };

            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    let err = TriggerError::Io {
                        name: name.clone(),
                        source: e,
                    };
                    warn!("skipped during reload: {}", err);
                    continue;
                }
            };

            let trigger = match Trigger::compile(self.engine.as_ref(), name.as_str(), &source) {
                Ok(trigger) => trigger,
                Err(e) => {
                    warn!("cannot parse trigger script for `{}`, skipped: {}", name, e);
                    continue;
                }
            };

            // First-loaded wins on name or alias collisions.
            if let Some(taken) = trigger
                .all_names()
                .iter()
                .find(|n| self.name_in_use(n))
            {
                warn!(
                    "trigger `{}` skipped: `{}` already claimed by an earlier entry",
                    name, taken
                );
                continue;
            }

            self.triggers.insert(name, trigger);
        }
    }

    /// Write every trigger's script source to its dedicated file. An
    /// entry whose write fails is evicted from memory — the store no
    /// longer guarantees it is durable — and returned to the caller.
    pub fn save_all(&mut self) -> Vec<String> {
        let mut evicted = Vec::new();
        for (name, trigger) in &self.triggers {
            let path = self.folder.join(name);
            if let Err(e) = galdr_store::write_atomic(&path, trigger.source().as_bytes()) {
                error!("could not save command trigger `{}`: {}", name, e);
                evicted.push(name.clone());
            }
        }
        for name in &evicted {
            self.triggers.remove(name);
        }
        evicted
    }

    /// Bind `name` to a freshly compiled trigger. Fails without mutation
    /// if the name (or, after compiling, any declared alias) is already
    /// claimed, or if the script does not compile — in which case the
    /// invoker receives a safe diagnostic and the full detail is logged.
    pub fn add(
        &mut self,
        invoker: &dyn CommandSender,
        name: &str,
        source: &str,
    ) -> Result<Trigger, TriggerError> {
        if self.name_in_use(name) {
            return Err(TriggerError::DuplicateBinding(name.to_string()));
        }

        let trigger = match Trigger::compile(self.engine.as_ref(), name, source) {
            Ok(trigger) => trigger,
            Err(parse) => {
                invoker.send_message("Encountered an error while compiling the script!");
                invoker.send_message(&parse.to_string());
                invoker.send_message("If you are an administrator, check the console for details.");
                error!(
                    "trigger script for `{}` failed to compile: {}\nsource:\n{}",
                    name, parse, source
                );
                return Err(TriggerError::Parse {
                    name: name.to_string(),
                    source: parse,
                });
            }
        };

        if let Some(taken) = trigger.aliases().iter().find(|a| self.name_in_use(a)) {
            return Err(TriggerError::DuplicateBinding(taken.to_string()));
        }

        self.triggers.insert(name.to_string(), trigger.clone());
        Ok(trigger)
    }

    /// Unbind `name`. The persisted file is deleted best-effort: a
    /// delete failure is logged but does not roll back the removal.
    pub fn remove(&mut self, name: &str) -> Result<Trigger, TriggerError> {
        let trigger = self
            .triggers
            .remove(name)
            .ok_or_else(|| TriggerError::MissingBinding(name.to_string()))?;

        let path = self.folder.join(name);
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("could not delete persisted trigger file for `{}`: {}", name, e);
            }
        }
        Ok(trigger)
    }

    /// True if `name` is a bound primary command name.
    pub fn has(&self, name: &str) -> bool {
        self.triggers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Trigger> {
        self.triggers.get(name)
    }

    /// Resolve by primary name or alias.
    pub fn lookup(&self, name: &str) -> Option<&Trigger> {
        self.triggers
            .get(name)
            .or_else(|| self.triggers.values().find(|t| t.answers_to(name)))
    }

    /// True if `name` is claimed as a primary name or alias.
    pub fn name_in_use(&self, name: &str) -> bool {
        self.triggers.values().any(|t| t.answers_to(name))
    }

    /// Bound primary names, sorted for deterministic iteration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.triggers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}
