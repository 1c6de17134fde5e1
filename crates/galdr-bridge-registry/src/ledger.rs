use std::collections::HashMap;
use std::sync::Arc;

use crate::host::CommandMapping;

/// A prior host binding displaced by this adapter, held with intent to
/// restore it once restoration semantics exist.
pub struct OverrideRecord {
    pub mapping: Arc<dyn CommandMapping>,
    /// RFC 3339 instant of the displacement.
    pub displaced_at: String,
}

/// Records command bindings temporarily displaced when a trigger claims
/// a name already in use, keyed by command name. Private to each
/// adapter instance — never process-wide.
///
/// A record exists only while the adapter's own binding for that name
/// is active; `take` removes it on release.
#[derive(Default)]
pub struct OverrideLedger {
    records: HashMap<String, OverrideRecord>,
}

impl OverrideLedger {
    pub fn record(&mut self, name: &str, mapping: Arc<dyn CommandMapping>) {
        self.records.insert(
            name.to_string(),
            OverrideRecord {
                mapping,
                displaced_at: now_rfc3339(),
            },
        );
    }

    pub fn take(&mut self, name: &str) -> Option<OverrideRecord> {
        self.records.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Displaced names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.keys().cloned().collect();
        names.sort();
        names
    }
}

fn now_rfc3339() -> String {
    let now = time::OffsetDateTime::now_utc();
    now.format(&time::format_description::well_known::Rfc3339)
        .expect("RFC3339 formatting should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NamedMapping(String);

    impl CommandMapping for NamedMapping {
        fn primary_name(&self) -> &str {
            &self.0
        }
    }

    fn mapping(name: &str) -> Arc<dyn CommandMapping> {
        Arc::new(NamedMapping(name.to_string()))
    }

    #[test]
    fn record_and_take() {
        let mut ledger = OverrideLedger::default();
        assert!(ledger.is_empty());

        ledger.record("help", mapping("help"));
        assert!(ledger.contains("help"));
        assert_eq!(ledger.names(), ["help"]);

        let record = ledger.take("help").unwrap();
        assert_eq!(record.mapping.primary_name(), "help");
        assert!(!record.displaced_at.is_empty());
        assert!(ledger.is_empty());
        assert!(ledger.take("help").is_none());
    }

    #[test]
    fn ledgers_are_instance_private() {
        let mut a = OverrideLedger::default();
        let b = OverrideLedger::default();
        a.record("help", mapping("help"));
        assert_eq!(a.len(), 1);
        assert!(b.is_empty());
    }
}
