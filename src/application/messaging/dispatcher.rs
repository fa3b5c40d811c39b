//! Message dispatcher - addressing, command decoding, analyzers and help fallback

use crate::application::errors::BotError;
use crate::domain::command::CommandTree;
use crate::domain::entities::{Message, Reply};
use crate::domain::traits::Analyzer;
use super::addressing::{Address, AddressMode, Addressing};
use super::decoder::CommandDecoder;

/// Top-level router. Built once at startup and immutable afterwards.
pub struct Angie {
    addressing: Addressing,
    tree: CommandTree,
    analyzers: Vec<Box<dyn Analyzer>>,
    maintainers: Vec<String>,
    listen_all: bool,
}

impl Angie {
    pub fn builder(name: impl Into<String>) -> AngieBuilder {
        AngieBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        self.addressing.name()
    }

    pub fn mode(&self) -> AddressMode {
        self.addressing.mode()
    }

    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Decide on a reply for one message. `None` means stay silent.
    pub fn get_reply(&self, message: &Message) -> Option<String> {
        let address = self.addressing.detect(message);

        if let Some(command) = address.command_text() {
            let decoder = CommandDecoder::new(self.tree.root());
            if let Some(reply) = decoder.process_command(message, command) {
                return Some(reply.to_string());
            }
        }

        if address.is_addressed() || self.listen_all {
            if let Some(reply) = self.analyze(message) {
                return Some(reply.to_string());
            }
        }

        match address {
            Address::Prefixed { prefix, command } => Some(self.not_understood(Some(prefix), command).to_string()),
            Address::Implicit { command } => Some(self.not_understood(None, command).to_string()),
            Address::Unaddressed => {
                tracing::debug!("[{}] Ignoring unaddressed message", message.chat_id);
                None
            }
        }
    }

    /// First analyzer with something to say, in registration order
    fn analyze(&self, message: &Message) -> Option<Reply> {
        for analyzer in &self.analyzers {
            match analyzer.get_reply(message) {
                Ok(Some(reply)) if !reply.is_empty() => {
                    tracing::debug!("[{}] Analyzer '{}' replied", message.chat_id, analyzer.name());
                    return Some(reply);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!("[{}] Analyzer '{}' failed: {}", message.chat_id, analyzer.name(), e);
                }
            }
        }
        None
    }

    fn not_understood(&self, prefix: Option<&str>, command: &str) -> Reply {
        let mut reply = match prefix {
            Some(prefix) => Reply::message("Based on ")
                .code(prefix)
                .text(" I figured you were actually giving me command for ")
                .code(self.name().to_lowercase())
                .text(", but I"),
            None => Reply::message("I"),
        };

        reply = reply
            .text(" have no idea what you mean by ")
            .code(command)
            .text(".");

        let names = self.tree.names();
        if !names.is_empty() {
            let listed: Vec<String> = names.iter().map(|n| format!("`{}`", n)).collect();
            reply = reply
                .text(" I was expecting something of the following: ")
                .text(listed.join(", "))
                .text(".");
        }

        reply
            .text(" Maybe you made a typo, or ")
            .text(self.creators())
            .text(" made a mistake creating me! ")
            .emoji("sweat_smile")
    }

    fn creators(&self) -> String {
        let handles: Vec<String> = self.maintainers.iter().map(|m| format!("@{}", m)).collect();
        match handles.as_slice() {
            [] => "my creators".to_string(),
            [one] => format!("my creator {}", one),
            [init @ .., last] => format!("my creators {} and {}", init.join(", "), last),
        }
    }
}

/// Collects the parts of an [`Angie`]
pub struct AngieBuilder {
    name: String,
    mode: AddressMode,
    tree: CommandTree,
    analyzers: Vec<Box<dyn Analyzer>>,
    maintainers: Vec<String>,
    listen_all: bool,
}

impl AngieBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: AddressMode::Mention,
            tree: CommandTree::new(),
            analyzers: Vec::new(),
            maintainers: Vec::new(),
            listen_all: true,
        }
    }

    pub fn with_mode(mut self, mode: AddressMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_tree(mut self, tree: CommandTree) -> Self {
        self.tree = tree;
        self
    }

    /// Analyzers are consulted in the order they are added
    pub fn with_analyzer<A: Analyzer + 'static>(mut self, analyzer: A) -> Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    pub fn with_maintainers(mut self, maintainers: Vec<String>) -> Self {
        self.maintainers = maintainers;
        self
    }

    /// Whether analyzers also see messages not addressed to the bot
    pub fn with_listen_all(mut self, listen_all: bool) -> Self {
        self.listen_all = listen_all;
        self
    }

    pub fn build(self) -> Result<Angie, BotError> {
        let addressing = Addressing::new(self.name, self.mode)?;
        tracing::info!(
            "{} ready with {} commands and {} analyzers",
            addressing.name(),
            self.tree.len(),
            self.analyzers.len()
        );

        Ok(Angie {
            addressing,
            tree: self.tree,
            analyzers: self.analyzers,
            maintainers: self.maintainers,
            listen_all: self.listen_all,
        })
    }
}
