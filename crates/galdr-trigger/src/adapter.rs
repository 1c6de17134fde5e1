use galdr_core::Trigger;

/// The seam between the manager and a host's command-dispatch model.
///
/// Two models exist: passive interception of the host's raw command
/// input, and formal registration in the host's command registry. Both
/// must produce identical externally observable behavior — binding,
/// override, aliases, completion, permission gating — behind this one
/// contract.
pub trait DispatchAdapter: Send {
    /// Claim `name` (and, atomically, every alias the trigger declares)
    /// with the host. Returns `true` if a pre-existing host binding was
    /// displaced in the process.
    fn register(&mut self, name: &str, trigger: &Trigger) -> anyhow::Result<bool>;

    /// Release the adapter's own binding for `name`. Returns `false`
    /// if the adapter held nothing under that name.
    fn unregister(&mut self, name: &str) -> anyhow::Result<bool>;
}
