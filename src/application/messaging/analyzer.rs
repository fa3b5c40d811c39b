//! Keyword analyzer - canned replies for free text that mentions a pattern

use regex_lite::Regex;

use crate::application::errors::{BotError, ConfigError};
use crate::domain::entities::{Message, Reply};
use crate::domain::traits::Analyzer;

/// Replies with a fixed text whenever its pattern occurs anywhere in a message
pub struct KeywordAnalyzer {
    name: String,
    pattern: Regex,
    reply: String,
}

impl KeywordAnalyzer {
    /// Compiles `pattern` case-insensitively
    pub fn new(name: impl Into<String>, pattern: &str, reply: impl Into<String>) -> Result<Self, BotError> {
        let name = name.into();
        let pattern = Regex::new(&format!("(?i){}", pattern))
            .map_err(|e| ConfigError::InvalidValue(format!("analyzer '{}': {}", name, e)))?;

        Ok(Self {
            name,
            pattern,
            reply: reply.into(),
        })
    }
}

impl Analyzer for KeywordAnalyzer {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_reply(&self, message: &Message) -> Result<Option<Reply>, BotError> {
        if self.pattern.is_match(&message.text) {
            Ok(Reply::message(self.reply.as_str()).non_empty())
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_anywhere_in_text() {
        let analyzer = KeywordAnalyzer::new("angular3", "angular3", "its Angular time!").unwrap();
        let msg = Message::from_text("Hey guys, whens Angular3 comming out?");
        let reply = analyzer.get_reply(&msg).unwrap();
        assert_eq!(reply.map(|r| r.to_string()).as_deref(), Some("its Angular time!"));
    }

    #[test]
    fn test_no_match_is_none() {
        let analyzer = KeywordAnalyzer::new("angular3", "angular3", "its Angular time!").unwrap();
        assert!(analyzer.get_reply(&Message::from_text("hello people")).unwrap().is_none());
    }

    #[test]
    fn test_invalid_pattern_is_config_error() {
        let err = KeywordAnalyzer::new("broken", "(", "x").err().unwrap();
        assert!(matches!(err, BotError::Config(ConfigError::InvalidValue(_))));
    }
}
