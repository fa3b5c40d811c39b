//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Sources: Fixture files and remote data for the commands
//! - Adapters: Chat transports (console)
//! - Bootstrap: Wiring config and data into an Angie

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod sources;
