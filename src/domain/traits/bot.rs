use async_trait::async_trait;
use crate::domain::entities::Message;
use crate::application::errors::BotError;

/// Bot trait - abstraction for chat transport adapters
#[async_trait]
pub trait Bot: Send + Sync {
    /// Prepare the transport
    async fn start(&self) -> Result<(), BotError>;

    /// Wait for the next inbound message. `None` once the transport is closed.
    async fn next_message(&self) -> Option<Message>;

    /// Send a message to a chat
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<String, BotError>;

    /// Get bot info
    fn bot_info(&self) -> BotInfo;
}

/// Bot information
#[derive(Debug, Clone)]
pub struct BotInfo {
    pub id: String,
    pub name: String,
    pub platform: String,
}
