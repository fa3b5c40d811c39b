//! Command tree - regex-tagged nodes with optional handlers and ordered children

pub mod matcher;
pub mod node;
pub mod tree;

pub use matcher::{AlwaysMatcher, KeywordMatcher, Matcher, NeverMatcher, RegexMatcher};
pub use node::{CommandNode, CommandNodeBuilder, Handler, Invocation};
pub use tree::{CommandEntry, CommandSubtree, CommandTree};
