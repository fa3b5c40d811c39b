//! Application services - the commands Angie knows

pub mod docs_service;
pub mod events_service;
pub mod help_service;
pub mod versions_service;

pub use docs_service::{DocEntry, DocsIndex, DocsService};
pub use events_service::{Event, EventsService};
pub use help_service::HelpService;
pub use versions_service::{CommitRef, Tag, Version, VersionsService};

use crate::domain::command::{CommandEntry, CommandTree};
use crate::domain::traits::CommandProvider;

/// Build the command tree: `help` first, then each provider's subtree in order
pub fn assemble_tree(providers: &[&dyn CommandProvider]) -> CommandTree {
    let subtrees: Vec<_> = providers.iter().map(|p| p.command_subtree()).collect();

    let mut entries = vec![HelpService::entry()];
    entries.extend(subtrees.iter().map(|s| CommandEntry {
        name: s.name.clone(),
        description: s.description.clone(),
    }));

    let mut tree = CommandTree::new();
    tree.register_subcommand(HelpService::new(entries).command_subtree());
    for subtree in subtrees {
        tree.register_subcommand(subtree);
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_registered_first() {
        let docs = DocsService::new(DocsIndex::new());
        let events = EventsService::new(Vec::new());
        let versions = VersionsService::new(Vec::new());

        let tree = assemble_tree(&[&docs, &events, &versions]);
        assert_eq!(tree.names(), vec!["help", "docs", "events", "version"]);
    }
}
