//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Services: The leaf commands (help, docs, events, version)
//! - Errors: Domain-specific errors
//! - Messaging: Addressing, command decoding, analyzers, dispatching

pub mod errors;
pub mod services;
pub mod messaging;
