use std::sync::Arc;

use uuid::Uuid;

/// Bridge to whoever issued a command or admin operation on the host.
pub trait CommandSender: Send + Sync {
    fn name(&self) -> &str;

    fn has_permission(&self, node: &str) -> bool;

    fn send_message(&self, message: &str);
}

/// A player principal. The only principal type scripts activate for.
pub trait Player: CommandSender {
    fn unique_id(&self) -> Uuid;
}

/// The principal behind a host command invocation.
#[derive(Clone)]
pub enum CommandSource {
    Player(Arc<dyn Player>),
    Other(Arc<dyn CommandSender>),
}

impl CommandSource {
    pub fn sender(&self) -> &dyn CommandSender {
        match self {
            CommandSource::Player(p) => p.as_ref(),
            CommandSource::Other(s) => s.as_ref(),
        }
    }

    pub fn as_player(&self) -> Option<&Arc<dyn Player>> {
        match self {
            CommandSource::Player(p) => Some(p),
            CommandSource::Other(_) => None,
        }
    }
}
