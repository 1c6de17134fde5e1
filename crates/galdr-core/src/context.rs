use std::collections::BTreeMap;
use std::sync::Arc;

use crate::sender::Player;

/// Variable bindings handed to a script activation.
pub type VarMap = BTreeMap<String, serde_json::Value>;

/// Well-known binding names.
pub mod var {
    pub const PLAYER: &str = "player";
    pub const PLAYER_UUID: &str = "playeruuid";
    pub const COMMAND: &str = "command";
    pub const ARGS: &str = "args";
    pub const ARGS_LENGTH: &str = "argslength";
}

/// Transient per-invocation bindings passed into a script.
/// Built fresh for every activation, discarded when it returns.
pub struct ExecutionContext {
    invoker: Arc<dyn Player>,
    vars: VarMap,
}

impl ExecutionContext {
    /// Build the bindings for a player-originated command: the
    /// player-identifying variables plus command name, argument list,
    /// and argument count.
    pub fn for_player(invoker: Arc<dyn Player>, command: &str, args: &[String]) -> Self {
        let mut vars = VarMap::new();
        vars.insert(var::PLAYER.to_string(), invoker.name().into());
        vars.insert(
            var::PLAYER_UUID.to_string(),
            invoker.unique_id().to_string().into(),
        );
        vars.insert(var::COMMAND.to_string(), command.into());
        vars.insert(var::ARGS.to_string(), args.into());
        vars.insert(var::ARGS_LENGTH.to_string(), args.len().into());
        Self { invoker, vars }
    }

    pub fn invoker(&self) -> &Arc<dyn Player> {
        &self.invoker
    }

    pub fn vars(&self) -> &VarMap {
        &self.vars
    }

    pub fn var(&self, name: &str) -> Option<&serde_json::Value> {
        self.vars.get(name)
    }
}

/// Split a raw argument string into tokens. An empty string is an empty
/// argument list, not a single empty token.
pub fn split_arguments(arguments: &str) -> Vec<String> {
    if arguments.is_empty() {
        return Vec::new();
    }
    arguments.split(' ').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sender::CommandSender;
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

    fn player(name: &str) -> Arc<dyn Player> {
        Arc::new(FakePlayer {
            name: name.to_string(),
            id: Uuid::new_v4(),
        })
    }

    #[test]
    fn context_carries_minimum_bindings() {
        let p = player("alice");
        let args = vec!["north".to_string(), "3".to_string()];
        let ctx = ExecutionContext::for_player(Arc::clone(&p), "warp", &args);

        assert_eq!(ctx.var(var::PLAYER).unwrap(), "alice");
        assert_eq!(
            ctx.var(var::PLAYER_UUID).unwrap(),
            &serde_json::Value::from(p.unique_id().to_string())
        );
        assert_eq!(ctx.var(var::COMMAND).unwrap(), "warp");
        assert_eq!(ctx.var(var::ARGS).unwrap(), &serde_json::json!(["north", "3"]));
        assert_eq!(ctx.var(var::ARGS_LENGTH).unwrap(), 2);
        assert_eq!(ctx.invoker().name(), "alice");
    }

    #[test]
    fn empty_argument_string_has_zero_args() {
        let ctx = ExecutionContext::for_player(player("bob"), "home", &split_arguments(""));
        assert_eq!(ctx.var(var::ARGS_LENGTH).unwrap(), 0);
        assert_eq!(ctx.var(var::ARGS).unwrap(), &serde_json::json!([]));
    }

    #[test]
    fn split_arguments_keeps_tokens() {
        assert_eq!(split_arguments("a b"), vec!["a", "b"]);
        assert!(split_arguments("").is_empty());
    }
}
