use std::sync::Arc;

use crate::domain::command::{CommandEntry, CommandNodeBuilder, CommandSubtree, KeywordMatcher};
use crate::domain::entities::Reply;

/// Builds the `help` subtree from the commands registered alongside it
pub struct HelpService {
    entries: Arc<Vec<CommandEntry>>,
}

impl HelpService {
    pub fn new(entries: Vec<CommandEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn entry() -> CommandEntry {
        CommandEntry {
            name: "help".to_string(),
            description: "Show this message".to_string(),
        }
    }

    pub fn help_reply(&self) -> Reply {
        help_reply(&self.entries)
    }

    pub fn command_subtree(&self) -> CommandSubtree {
        let entries = Arc::clone(&self.entries);
        let node = CommandNodeBuilder::new()
            .with_matcher(KeywordMatcher::new("help"))
            .with_handler(move |_| Ok(help_reply(&entries)))
            .to_node();

        let entry = Self::entry();
        CommandSubtree::new(entry.name, entry.description, node)
    }
}

fn help_reply(entries: &[CommandEntry]) -> Reply {
    let mut reply = Reply::message("Here's what I can do:");
    for entry in entries {
        reply = reply.text("\n- ").code(&entry.name);
        if !entry.description.is_empty() {
            reply = reply.text(format!(": {}", entry.description));
        }
    }
    reply
}
