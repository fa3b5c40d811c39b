//! Addressing - decides whether a message is meant for the bot

use std::borrow::Cow;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::application::errors::{BotError, ConfigError};
use crate::domain::entities::Message;

/// Greetings tolerated in front of the bot's name
const GREETINGS: &str = "hey|hi|hello|yo|ok|okay|dear";

/// How the bot expects to be addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressMode {
    /// Shared channel: messages must start with the bot's name
    #[default]
    Mention,
    /// Every message is for the bot
    Direct,
}

/// Result of the addressing check for one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Address<'a> {
    /// Starts with the bot's name; `prefix` is the literal text that was stripped
    Prefixed { prefix: &'a str, command: &'a str },
    /// Addressed by the channel or mode, no prefix present
    Implicit { command: &'a str },
    Unaddressed,
}

impl<'a> Address<'a> {
    pub fn command_text(&self) -> Option<&'a str> {
        match self {
            Address::Prefixed { command, .. } | Address::Implicit { command } => Some(*command),
            Address::Unaddressed => None,
        }
    }

    pub fn is_addressed(&self) -> bool {
        !matches!(self, Address::Unaddressed)
    }
}

/// Detects the name prefix ("angie", "Angie,", "Hey Angie:" ...)
///
/// The name must be followed by whitespace or the end of the message, so
/// "Angie's great" or "Angie-bot is down" are not addresses. Case folding
/// of the name is ASCII-only. Non-ASCII whitespace is treated as a space.
#[derive(Debug, Clone)]
pub struct Addressing {
    name: String,
    mode: AddressMode,
    prefix: Regex,
}

impl Addressing {
    pub fn new(name: impl Into<String>, mode: AddressMode) -> Result<Self, BotError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigError::MissingField("bot.name".to_string()).into());
        }
        let pattern = format!(
            r"(?i)^((?:(?:{})\s+)?@?{}[,:;!.]?)(?:\s+|$)",
            GREETINGS,
            regex_lite::escape(name.trim())
        );
        let prefix = Regex::new(&pattern)
            .map_err(|e| ConfigError::InvalidValue(format!("bot.name '{}': {}", name, e)))?;

        Ok(Self { name, mode, prefix })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    /// Split a message into address prefix and command text
    pub fn detect<'a>(&self, message: &'a Message) -> Address<'a> {
        let text = message.text.trim();

        // offsets into the normalized text are valid in `text`
        if let Some(caps) = self.prefix.captures(&ascii_whitespace(text)) {
            if let (Some(whole), Some(prefix)) = (caps.get(0), caps.get(1)) {
                return Address::Prefixed {
                    prefix: &text[..prefix.end()],
                    command: text[whole.end()..].trim(),
                };
            }
        }

        if self.mode == AddressMode::Direct || message.is_direct() {
            Address::Implicit { command: text }
        } else {
            Address::Unaddressed
        }
    }
}

/// Replace non-ASCII whitespace with ASCII spaces of the same byte length
fn ascii_whitespace(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() && !c.is_ascii() {
            normalized.extend(std::iter::repeat(' ').take(c.len_utf8()));
        } else {
            normalized.push(c);
        }
    }
    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Channel;

    fn addressing(mode: AddressMode) -> Addressing {
        Addressing::new("Angie", mode).unwrap()
    }

    /// (prefix, command text) as owned strings
    fn detect(mode: AddressMode, text: &str) -> (Option<String>, Option<String>) {
        let msg = Message::from_text(text);
        match addressing(mode).detect(&msg) {
            Address::Prefixed { prefix, command } => (Some(prefix.to_string()), Some(command.to_string())),
            Address::Implicit { command } => (None, Some(command.to_string())),
            Address::Unaddressed => (None, None),
        }
    }

    fn prefixed(prefix: &str, command: &str) -> (Option<String>, Option<String>) {
        (Some(prefix.to_string()), Some(command.to_string()))
    }

    #[test]
    fn test_plain_name_prefix() {
        assert_eq!(detect(AddressMode::Mention, "angie version"), prefixed("angie", "version"));
    }

    #[test]
    fn test_prefix_with_punctuation_and_greeting() {
        assert_eq!(
            detect(AddressMode::Mention, "Angie, give me docs for AsyncPipe"),
            prefixed("Angie,", "give me docs for AsyncPipe")
        );
        assert_eq!(
            detect(AddressMode::Mention, "Hey Angie, what's up?"),
            prefixed("Hey Angie,", "what's up?")
        );
        assert_eq!(detect(AddressMode::Mention, "@angie: help"), prefixed("@angie:", "help"));
    }

    #[test]
    fn test_unaddressed_in_mention_mode() {
        assert_eq!(detect(AddressMode::Mention, "hello people"), (None, None));
        assert_eq!(detect(AddressMode::Mention, "angies are great"), (None, None));
        assert_eq!(detect(AddressMode::Mention, "I told angie"), (None, None));
    }

    #[test]
    fn test_name_inside_a_word_is_not_an_address() {
        assert_eq!(detect(AddressMode::Mention, "Angie's great"), (None, None));
        assert_eq!(detect(AddressMode::Mention, "Angie-bot is down"), (None, None));
        assert_eq!(detect(AddressMode::Mention, "angie.rs is a crate"), (None, None));
        assert_eq!(detect(AddressMode::Mention, "angie"), prefixed("angie", ""));
        assert_eq!(detect(AddressMode::Mention, "Angie!"), prefixed("Angie!", ""));
    }

    #[test]
    fn test_unicode_whitespace_around_the_name() {
        assert_eq!(
            detect(AddressMode::Mention, "Hey\u{00a0}Angie, version"),
            prefixed("Hey\u{00a0}Angie,", "version")
        );
        assert_eq!(
            detect(AddressMode::Mention, "angie\u{2003}docs AsyncPipe"),
            prefixed("angie", "docs AsyncPipe")
        );
    }

    #[test]
    fn test_direct_mode_assumes_address() {
        assert_eq!(detect(AddressMode::Direct, "version"), (None, Some("version".to_string())));
        // prefix is still stripped when present
        assert_eq!(detect(AddressMode::Direct, "angie version"), prefixed("angie", "version"));
    }

    #[test]
    fn test_direct_channel_assumes_address() {
        let msg = Message::from_text("version").with_channel(Channel::Direct);
        let address = addressing(AddressMode::Mention).detect(&msg);
        assert_eq!(address, Address::Implicit { command: "version" });
        assert!(address.is_addressed());
    }

    #[test]
    fn test_empty_name_is_rejected() {
        assert!(Addressing::new("  ", AddressMode::Mention).is_err());
    }
}
