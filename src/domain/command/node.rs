use std::fmt;

use super::matcher::{Matcher, NeverMatcher, RegexMatcher};
use crate::application::errors::CommandError;
use crate::domain::entities::{Message, Reply};

/// What a handler gets when its node is the deepest match
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    pub message: &'a Message,
    /// Text left over after the matched path, leading whitespace trimmed
    pub args: &'a str,
}

/// Command handler function type
pub type Handler = Box<dyn Fn(&Invocation<'_>) -> Result<Reply, CommandError> + Send + Sync>;

/// A node of the command tree
pub struct CommandNode {
    matcher: Box<dyn Matcher>,
    handler: Option<Handler>,
    children: Vec<CommandNode>,
}

impl CommandNode {
    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    pub fn handler(&self) -> Option<&Handler> {
        self.handler.as_ref()
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Attach a finished subtree. Only used while a tree is being assembled.
    pub(crate) fn push_child(&mut self, child: CommandNode) {
        self.children.push(child);
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("matcher", &self.matcher.describe())
            .field("handler", &self.handler.is_some())
            .field("children", &self.children)
            .finish()
    }
}

/// Fluent construction of a [`CommandNode`] tree
#[derive(Default)]
pub struct CommandNodeBuilder {
    matcher: Option<Box<dyn Matcher>>,
    handler: Option<Handler>,
    children: Vec<CommandNode>,
}

impl CommandNodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regex pattern and its handler. Replaces any earlier registration.
    pub fn with_command<F>(self, pattern: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<Reply, CommandError> + Send + Sync + 'static,
    {
        self.with_matcher(RegexMatcher::new(pattern)).with_handler(handler)
    }

    /// Register a regex pattern with no handler (a command group keyword)
    pub fn with_pattern(self, pattern: impl Into<String>) -> Self {
        self.with_matcher(RegexMatcher::new(pattern))
    }

    pub fn with_matcher<M: Matcher + 'static>(mut self, matcher: M) -> Self {
        self.matcher = Some(Box::new(matcher));
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Invocation<'_>) -> Result<Reply, CommandError> + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Build a child with a fresh builder and append it after existing children
    pub fn with_child<F>(mut self, build: F) -> Self
    where
        F: FnOnce(CommandNodeBuilder) -> CommandNodeBuilder,
    {
        let child = build(CommandNodeBuilder::new()).to_node();
        self.children.push(child);
        self
    }

    pub fn to_node(self) -> CommandNode {
        CommandNode {
            matcher: self.matcher.unwrap_or_else(|| Box::new(NeverMatcher)),
            handler: self.handler,
            children: self.children,
        }
    }
}
