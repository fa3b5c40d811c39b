//! Command decoder - resolves message text against the command tree

use crate::domain::command::{CommandNode, Invocation};
use crate::domain::entities::{Message, Reply};

/// Outcome of walking the tree: the deepest node with a handler on the
/// matched path, and the text left after that node's match.
#[derive(Debug, Clone, Copy)]
pub struct Resolution<'n, 't> {
    pub node: &'n CommandNode,
    pub args: &'t str,
    /// Distance from the root, 0 being the root itself
    pub depth: usize,
}

/// Walks a command tree for each message. Holds no per-call state.
pub struct CommandDecoder<'n> {
    root: &'n CommandNode,
}

impl<'n> CommandDecoder<'n> {
    pub fn new(root: &'n CommandNode) -> Self {
        Self { root }
    }

    /// Decode the message's own text
    pub fn process_message(&self, message: &Message) -> Option<Reply> {
        self.process_command(message, &message.text)
    }

    /// Decode `command_text` (usually the message text minus the address
    /// prefix) and run the resolved handler with `message`.
    pub fn process_command(&self, message: &Message, command_text: &str) -> Option<Reply> {
        let resolution = self.resolve(command_text)?;
        let handler = resolution.node.handler()?;

        tracing::debug!(
            "Resolved '{}' to {} at depth {} (args: '{}')",
            command_text,
            resolution.node.matcher().describe(),
            resolution.depth,
            resolution.args
        );

        let invocation = Invocation {
            message,
            args: resolution.args,
        };
        match handler(&invocation) {
            Ok(reply) => reply.non_empty(),
            Err(e) => {
                tracing::warn!("Command {} failed: {}", resolution.node.matcher().describe(), e);
                None
            }
        }
    }

    /// Find the handler a text resolves to, without running it
    pub fn resolve<'t>(&self, text: &'t str) -> Option<Resolution<'n, 't>> {
        let text = text.trim();
        let consumed = self.root.matcher().match_prefix(text)?;
        let rest = text.get(consumed..).unwrap_or("").trim_start();
        Self::descend(self.root, rest, 0)
    }

    /// `node` has already matched and `rest` is the text after its match.
    /// The first child that matches `rest` is committed to; later siblings
    /// are never consulted. If that branch yields no handler, this node's
    /// own handler (if any) stands.
    fn descend<'t>(node: &'n CommandNode, rest: &'t str, depth: usize) -> Option<Resolution<'n, 't>> {
        let own = node.has_handler().then_some(Resolution {
            node,
            args: rest,
            depth,
        });

        let committed = node.children().iter().find_map(|child| {
            child
                .matcher()
                .match_prefix(rest)
                .map(|consumed| (child, rest.get(consumed..).unwrap_or("").trim_start()))
        });

        match committed {
            Some((child, child_rest)) => Self::descend(child, child_rest, depth + 1).or(own),
            None => own,
        }
    }
}
