//! Console adapter for local development

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use crate::domain::entities::{Channel, Message, User};
use crate::domain::traits::{Bot, BotInfo};
use crate::application::errors::BotError;

const CHAT_ID: &str = "console";

/// Reads messages from stdin, prints replies to stdout
pub struct ConsoleAdapter {
    info: BotInfo,
    channel: Channel,
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: name.into(),
                platform: "console".to_string(),
            },
            channel: Channel::Room,
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }

    /// Treat the console as a one-to-one conversation
    pub fn direct(mut self) -> Self {
        self.channel = Channel::Direct;
        self
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode), type a message and press enter");
        Ok(())
    }

    async fn next_message(&self) -> Option<Message> {
        let mut lines = self.lines.lock().await;
        loop {
            let mut stdout = tokio::io::stdout();
            let _ = stdout.write_all(b"> ").await;
            let _ = stdout.flush().await;

            match lines.next_line().await {
                Ok(Some(line)) if line.trim().is_empty() => continue,
                Ok(Some(line)) => {
                    return Some(
                        Message::new(CHAT_ID, line)
                            .with_channel(self.channel)
                            .with_platform("console")
                            .with_sender(User::new("local").with_display("you")),
                    );
                }
                Ok(None) => return None,
                Err(e) => {
                    tracing::error!("Failed to read stdin: {}", e);
                    return None;
                }
            }
        }
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<String, BotError> {
        println!("[{}] {}", self.info.name, text);
        Ok("console_msg".to_string())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
