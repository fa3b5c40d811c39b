//! Docs lookup - `docs <topic>`

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::command::{CommandNodeBuilder, CommandSubtree, Invocation};
use crate::domain::entities::Reply;
use crate::domain::traits::CommandProvider;
use crate::application::errors::CommandError;

pub const DEFAULT_DOCS_URL: &str = "https://angular.io/docs/ts/latest/api/";

/// Accepts "docs", "give me docs for", "documentation on", "api about" ...
const DOCS_PATTERN: &str = r"(?:(?:give|show|get|find)\s+(?:me\s+)?)?(?:the\s+)?(?:docs?|documentation|api)\b(?:\s+(?:for|on|about|of)\b)?";

/// One API entry as published in the docs api-list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    pub title: String,
    pub path: String,
    pub doc_type: String,
    pub stability: String,
    #[serde(default)]
    pub secure: String,
    pub barrel: String,
}

/// API entries grouped by barrel (package)
pub type DocsIndex = BTreeMap<String, Vec<DocEntry>>;

pub struct DocsService {
    index: Arc<DocsIndex>,
    base_url: String,
}

impl DocsService {
    pub fn new(index: DocsIndex) -> Self {
        Self::with_base_url(index, DEFAULT_DOCS_URL)
    }

    pub fn with_base_url(index: DocsIndex, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self {
            index: Arc::new(index),
            base_url,
        }
    }

    pub fn len(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reply for a topic, found or not
    pub fn lookup(&self, topic: &str) -> Reply {
        lookup(&self.index, &self.base_url, topic)
    }
}

fn find<'a>(index: &'a DocsIndex, topic: &str) -> Option<&'a DocEntry> {
    index
        .values()
        .flatten()
        .find(|entry| entry.title.eq_ignore_ascii_case(topic))
}

fn lookup(index: &DocsIndex, base_url: &str, topic: &str) -> Reply {
    let topic = topic.trim().trim_end_matches(['?', '!', '.']).trim_end();

    if topic.is_empty() {
        return Reply::message("You can find everything in the ")
            .link("API Reference", base_url)
            .text("! ")
            .emoji("grin");
    }

    match find(index, topic) {
        Some(entry) => Reply::message("***")
            .link(format!("`{}`", entry.title), format!("{}{}", base_url, entry.path))
            .text("***")
            .text(" is a ")
            .bold(&entry.doc_type)
            .text(" found in ")
            .code(&entry.barrel)
            .text(" and is considered ")
            .italic(&entry.stability)
            .text("."),
        None => Reply::message("Aww, bummer ")
            .emoji("anguished")
            .text(format!(" Looks like you wanted docs for _{}_, ", topic))
            .text("but I couldn't find anything. Might be a good idea to look directly at ")
            .link("API Reference", base_url)
            .text("! ")
            .emoji("grin"),
    }
}

impl CommandProvider for DocsService {
    fn command_subtree(&self) -> CommandSubtree {
        let index = Arc::clone(&self.index);
        let base_url = self.base_url.clone();

        let node = CommandNodeBuilder::new()
            .with_command(DOCS_PATTERN, move |inv: &Invocation<'_>| -> Result<Reply, CommandError> {
                Ok(lookup(&index, &base_url, inv.args))
            })
            .to_node();

        CommandSubtree::new("docs", "Look up an API entry, e.g. `docs AsyncPipe`", node)
    }
}
