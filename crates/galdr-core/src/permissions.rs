use crate::sender::CommandSender;

/// True iff the sender holds every declared permission node.
/// An empty set always passes.
pub fn holds_all(sender: &dyn CommandSender, nodes: &[String]) -> bool {
    nodes.iter().all(|node| sender.has_permission(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSender {
        granted: Vec<String>,
    }

    impl CommandSender for FixedSender {
        fn name(&self) -> &str {
            "tester"
        }
        fn has_permission(&self, node: &str) -> bool {
            self.granted.iter().any(|g| g == node)
        }
        fn send_message(&self, _message: &str) {}
    }

    fn nodes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_set_always_passes() {
        let s = FixedSender { granted: vec![] };
        assert!(holds_all(&s, &[]));
    }

    #[test]
    fn all_nodes_must_hold() {
        let s = FixedSender {
            granted: nodes(&["galdr.warp", "galdr.home"]),
        };
        assert!(holds_all(&s, &nodes(&["galdr.warp"])));
        assert!(holds_all(&s, &nodes(&["galdr.warp", "galdr.home"])));
        assert!(!holds_all(&s, &nodes(&["galdr.warp", "galdr.admin"])));
    }
}
