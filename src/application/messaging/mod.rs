//! Message handling - addressing, command decoding, analyzers, dispatch

pub mod addressing;
pub mod analyzer;
pub mod decoder;
pub mod dispatcher;

pub use addressing::{Address, AddressMode, Addressing};
pub use analyzer::KeywordAnalyzer;
pub use decoder::{CommandDecoder, Resolution};
pub use dispatcher::{Angie, AngieBuilder};
