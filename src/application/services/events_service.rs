//! Community events - `events [name]`

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::command::{CommandNodeBuilder, CommandSubtree};
use crate::domain::entities::Reply;
use crate::domain::traits::CommandProvider;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Event {
    pub name: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub link: String,
}

pub struct EventsService {
    events: Arc<Vec<Event>>,
}

impl EventsService {
    /// Events are kept sorted by date
    pub fn new(mut events: Vec<Event>) -> Self {
        events.sort_by_key(|e| e.date);
        Self {
            events: Arc::new(events),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_reply(&self, query: &str) -> Reply {
        events_reply(&self.events, query)
    }
}

fn format_event(event: &Event) -> Reply {
    Reply::new()
        .bold(&event.name)
        .text(format!(" in {} on {} ", event.location, event.date.format("%B %-d, %Y")))
        .text("(")
        .link("details", &event.link)
        .text(")")
}

fn events_reply(events: &[Event], query: &str) -> Reply {
    let query = query.trim();
    let needle = query.to_lowercase();
    let matching: Vec<&Event> = events
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .collect();

    if matching.is_empty() {
        return if query.is_empty() {
            Reply::message("I don't know about any events right now ").emoji("disappointed")
        } else {
            Reply::message(format!("I couldn't find any events matching _{}_ ", query)).emoji("disappointed")
        };
    }

    let mut reply = Reply::message("Here are the events I know about:");
    for event in matching {
        reply = reply.text("\n- ").append(format_event(event));
    }
    reply
}

impl CommandProvider for EventsService {
    fn command_subtree(&self) -> CommandSubtree {
        let events = Arc::clone(&self.events);

        let node = CommandNodeBuilder::new()
            .with_command(r"(?:conferences?|events?|meetups?)\b", move |inv| Ok(events_reply(&events, inv.args)))
            .to_node();

        CommandSubtree::new("events", "List community events, optionally filtered by name", node)
    }
}
