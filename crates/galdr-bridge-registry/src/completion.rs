use galdr_core::{TabCompleter, Trigger};

/// Resolve completion for a partial argument string against the
/// trigger's declared completers. The completer index is the number of
/// completed tokens — the position being typed. A position beyond the
/// declared completers resolves to the no-op completer. An empty last
/// token yields the hint list; otherwise the prefix-filtered
/// candidates.
pub fn suggest(trigger: &Trigger, arguments: &str) -> Vec<String> {
    let tokens: Vec<&str> = arguments.split(' ').collect();
    let index = tokens.len() - 1;
    let partial = tokens[index];

    let empty = TabCompleter::empty();
    let completer = trigger
        .tab_completers()
        .get(index)
        .and_then(|c| c.as_ref())
        .unwrap_or(&empty);

    if partial.is_empty() {
        completer.hints().to_vec()
    } else {
        completer.candidates(partial)
    }
}
