//! angie-bot - a chat command router
//!
//! Messages addressed to the bot are resolved against a tree of regex-tagged
//! command nodes; free-text analyzers and a help fallback cover the rest.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::errors::BotError;
pub use application::messaging::{AddressMode, Angie};
pub use domain::entities::{Message, Reply};
