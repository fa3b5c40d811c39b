use crate::application::errors::BotError;
use crate::domain::entities::{Message, Reply};

/// Free-text responder, consulted only when no command matched.
///
/// `Ok(None)` and an empty reply both mean "nothing to say".
pub trait Analyzer: Send + Sync {
    fn name(&self) -> &str;

    fn get_reply(&self, message: &Message) -> Result<Option<Reply>, BotError>;
}
