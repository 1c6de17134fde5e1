use galdr_core::CommandSender;

/// The CLI operator as a command sender: full permissions, messages go
/// straight to stdout.
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "console"
    }

    fn has_permission(&self, _node: &str) -> bool {
        true
    }

    fn send_message(&self, message: &str) {
        println!("{message}");
    }
}
