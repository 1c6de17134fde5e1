use std::sync::Arc;

use galdr_core::Player;

/// Priority at which an observer is delivered host input. Observers
/// run lowest to highest, so `Highest` has the final say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HookPriority {
    Lowest,
    Low,
    Normal,
    High,
    Highest,
}

/// One item of raw command-like input observed from the host, always
/// player-originated in this dispatch model. Marking it handled tells
/// the host's native command pipeline not to re-process it; nothing
/// about the script's own execution is cancelled.
pub struct CommandInput {
    player: Arc<dyn Player>,
    message: String,
    handled: bool,
}

impl CommandInput {
    pub fn new(player: Arc<dyn Player>, message: impl Into<String>) -> Self {
        Self {
            player,
            message: message.into(),
            handled: false,
        }
    }

    pub fn player(&self) -> &Arc<dyn Player> {
        &self.player
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_handled(&self) -> bool {
        self.handled
    }

    pub fn mark_handled(&mut self) {
        self.handled = true;
    }
}
