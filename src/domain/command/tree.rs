use super::matcher::AlwaysMatcher;
use super::node::{CommandNode, CommandNodeBuilder};

/// A top-level command contributed by a collaborator
#[derive(Debug)]
pub struct CommandSubtree {
    pub name: String,
    pub description: String,
    pub node: CommandNode,
}

impl CommandSubtree {
    pub fn new(name: impl Into<String>, description: impl Into<String>, node: CommandNode) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            node,
        }
    }
}

/// Name and description of a registered top-level command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
}

/// Aggregate of all command subtrees under an implicit root.
///
/// Assembled once at startup, read-only afterwards.
#[derive(Debug)]
pub struct CommandTree {
    root: CommandNode,
    entries: Vec<CommandEntry>,
}

impl CommandTree {
    pub fn new() -> Self {
        Self {
            root: CommandNodeBuilder::new().with_matcher(AlwaysMatcher).to_node(),
            entries: Vec::new(),
        }
    }

    pub fn register_subcommand(&mut self, subtree: CommandSubtree) {
        tracing::debug!("Registering command '{}' ({})", subtree.name, subtree.node.matcher().describe());
        self.entries.push(CommandEntry {
            name: subtree.name,
            description: subtree.description,
        });
        self.root.push_child(subtree.node);
    }

    pub fn with_subcommand(mut self, subtree: CommandSubtree) -> Self {
        self.register_subcommand(subtree);
        self
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Top-level command names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandTree {
    fn default() -> Self {
        Self::new()
    }
}
