//! Domain layer - Core business objects and the command tree
//!
//! This layer contains:
//! - Entities: Core business objects (User, Message, Reply)
//! - Command: The command tree (matchers, nodes, builder)
//! - Traits: Abstractions for collaborators (Bot, Analyzer, CommandProvider)

pub mod command;
pub mod entities;
pub mod traits;
