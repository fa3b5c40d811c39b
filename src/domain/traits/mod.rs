//! Domain traits - Abstractions for transports and collaborators

pub mod analyzer;
pub mod bot;
pub mod provider;

pub use analyzer::Analyzer;
pub use bot::{Bot, BotInfo};
pub use provider::CommandProvider;
