/// Per-argument-position provider of completion hints and candidates.
///
/// Hints are shown when nothing has been typed at the position yet;
/// candidates are prefix-filtered against the partial token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabCompleter {
    hints: Vec<String>,
    candidates: Vec<String>,
}

impl TabCompleter {
    pub fn new(hints: Vec<String>, candidates: Vec<String>) -> Self {
        Self { hints, candidates }
    }

    /// A completer whose hint and candidate lists are the same values.
    pub fn of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        Self {
            hints: values.clone(),
            candidates: values,
        }
    }

    /// The no-op completer: no hints, no candidates.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Candidates whose text starts with the partial token.
    pub fn candidates(&self, partial: &str) -> Vec<String> {
        self.candidates
            .iter()
            .filter(|c| c.starts_with(partial))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_completer_yields_nothing() {
        let c = TabCompleter::empty();
        assert!(c.hints().is_empty());
        assert!(c.candidates("a").is_empty());
    }

    #[test]
    fn candidates_filter_by_prefix() {
        let c = TabCompleter::of(["abort", "about", "begin"]);
        assert_eq!(c.candidates("ab"), vec!["abort", "about"]);
        assert_eq!(c.candidates("begin"), vec!["begin"]);
        assert!(c.candidates("z").is_empty());
    }

    #[test]
    fn hints_and_candidates_can_differ() {
        let c = TabCompleter::new(
            vec!["<player>".to_string()],
            vec!["alice".to_string(), "bob".to_string()],
        );
        assert_eq!(c.hints(), ["<player>"]);
        assert_eq!(c.candidates("a"), vec!["alice"]);
    }
}
