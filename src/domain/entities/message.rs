use super::User;
use chrono::{DateTime, Utc};

/// Kind of channel a message arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channel {
    /// Shared room, the bot must be addressed by name
    #[default]
    Room,
    /// One-to-one conversation with the bot
    Direct,
}

/// Represents an inbound chat message
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub chat_id: String,
    pub sender: Option<User>,
    pub text: String,
    pub channel: Channel,
    pub timestamp: DateTime<Utc>,
    pub platform: String,
}

impl Message {
    pub fn new(chat_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            chat_id: chat_id.into(),
            sender: None,
            text: text.into(),
            channel: Channel::Room,
            timestamp: Utc::now(),
            platform: "unknown".to_string(),
        }
    }

    /// Message with only text, as used by tests and the one-shot CLI
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("local", text)
    }

    pub fn with_sender(mut self, user: User) -> Self {
        self.sender = Some(user);
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    pub fn is_direct(&self) -> bool {
        self.channel == Channel::Direct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_room_channel() {
        let msg = Message::from_text("angie version");
        assert_eq!(msg.channel, Channel::Room);
        assert!(!msg.is_direct());
        assert_eq!(msg.text, "angie version");
    }

    #[test]
    fn test_builder_sets_metadata() {
        let msg = Message::new("room-1", "hi")
            .with_channel(Channel::Direct)
            .with_platform("console")
            .with_sender(User::new("42").with_username("lazar"));

        assert!(msg.is_direct());
        assert_eq!(msg.platform, "console");
        assert_eq!(msg.sender.map(|u| u.display_name()), Some("lazar".to_string()));
    }
}
