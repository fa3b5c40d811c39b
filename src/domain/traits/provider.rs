use crate::domain::command::CommandSubtree;

/// A collaborator that contributes one top-level command to the tree
pub trait CommandProvider {
    fn command_subtree(&self) -> CommandSubtree;
}
