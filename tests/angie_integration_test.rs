//! End-to-end dispatch tests
//! Run with: cargo test --test angie_integration_test

use std::sync::Once;

use angie_bot::application::messaging::{Angie, KeywordAnalyzer};
use angie_bot::application::services::{assemble_tree, DocsIndex, DocsService, Event, EventsService, Tag, VersionsService};
use angie_bot::domain::entities::Message;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

fn docs() -> DocsIndex {
    serde_json::from_value(serde_json::json!({
        "@angular/common": [
            {
                "title": "AsyncPipe",
                "path": "common/index/AsyncPipe-pipe.html",
                "docType": "pipe",
                "stability": "stable",
                "secure": "false",
                "barrel": "@angular/common"
            },
            {
                "title": "CommonModule",
                "path": "common/index/CommonModule-class.html",
                "docType": "class",
                "stability": "stable",
                "secure": "false",
                "barrel": "@angular/common"
            }
        ]
    }))
    .expect("docs fixture")
}

fn events() -> Vec<Event> {
    serde_json::from_value(serde_json::json!([
        { "name": "conf-name", "location": "conf location", "date": "1970-01-01T00:00:00Z", "link": "www.google.com" },
        { "name": "conf-name-2", "location": "conf location", "date": "1970-01-01T00:00:00.001Z", "link": "www.google.rs" },
        { "name": "conf name with a space", "location": "some spacey place", "date": "1970-01-01T00:00:00.002Z", "link": "www.google.co.nz" }
    ]))
    .expect("events fixture")
}

fn tags() -> Vec<Tag> {
    serde_json::from_value(serde_json::json!([
        {
            "name": "g3_v2_0",
            "zipball_url": "https://api.github.com/repos/angular/angular/zipball/g3_v2_0",
            "tarball_url": "https://api.github.com/repos/angular/angular/tarball/g3_v2_0",
            "commit": {
                "sha": "ca16fc29a640bd0201a5045ff128d3813088bdc0",
                "url": "https://api.github.com/repos/angular/angular/commits/ca16fc29a640bd0201a5045ff128d3813088bdc0"
            }
        },
        {
            "name": "4.0.0-beta.7",
            "zipball_url": "https://api.github.com/repos/angular/angular/zipball/4.0.0-beta.7",
            "tarball_url": "https://api.github.com/repos/angular/angular/tarball/4.0.0-beta.7",
            "commit": {
                "sha": "09b4bd0dfbfda800796f7dac0b0206e49243b23c",
                "url": "https://api.github.com/repos/angular/angular/commits/09b4bd0dfbfda800796f7dac0b0206e49243b23c"
            }
        },
        {
            "name": "2.4.7",
            "zipball_url": "https://api.github.com/repos/angular/angular/zipball/2.4.7",
            "tarball_url": "https://api.github.com/repos/angular/angular/tarball/2.4.7",
            "commit": {
                "sha": "e90661aaee5ff6580a52711e1b75795b75cc9700",
                "url": "https://api.github.com/repos/angular/angular/commits/e90661aaee5ff6580a52711e1b75795b75cc9700"
            }
        },
        {
            "name": "2.4.6",
            "zipball_url": "https://api.github.com/repos/angular/angular/zipball/2.4.6",
            "tarball_url": "https://api.github.com/repos/angular/angular/tarball/2.4.6",
            "commit": {
                "sha": "343ee8a3a23dfcd171b018b8dfe85d571afccd6b",
                "url": "https://api.github.com/repos/angular/angular/commits/343ee8a3a23dfcd171b018b8dfe85d571afccd6b"
            }
        }
    ]))
    .expect("tags fixture")
}

fn angie() -> Angie {
    ensure_init();

    let docs = DocsService::new(docs());
    let events = EventsService::new(events());
    let versions = VersionsService::new(tags());

    Angie::builder("Angie")
        .with_tree(assemble_tree(&[&docs, &events, &versions]))
        .with_analyzer(KeywordAnalyzer::new("angular3", "angular3", "its Angular time!").expect("valid pattern"))
        .with_maintainers(vec!["Toxicable".to_string(), "lazarljubenovic".to_string()])
        .build()
        .expect("angie builds")
}

fn reply(text: &str) -> Option<String> {
    angie().get_reply(&Message::from_text(text))
}

#[test]
fn test_replies_to_version_command() {
    assert_eq!(
        reply("angie version").as_deref(),
        Some(
            "[**`angular/angular`**](https://www.github.com/angular/angular) is at \
             [**2.4.7**](https://www.github.com/angular/angular/commit/e90661aaee5ff6580a52711e1b75795b75cc9700) \
             (and [4.0.0-beta.7](https://www.github.com/angular/angular/commit/09b4bd0dfbfda800796f7dac0b0206e49243b23c))"
        )
    );
}

#[test]
fn test_replies_from_global_analyzer() {
    assert_eq!(
        reply("Hey guys, whens angular3 comming out?").as_deref(),
        Some("its Angular time!")
    );
}

#[test]
fn test_replies_to_docs_with_free_wording() {
    assert_eq!(
        reply("Angie, give me docs for AsyncPipe").as_deref(),
        Some(
            "***[`AsyncPipe`](https://angular.io/docs/ts/latest/api/common/index/AsyncPipe-pipe.html)*** \
             is a **pipe** found in `@angular/common` and is considered *stable*."
        )
    );
}

#[test]
fn test_docs_not_found_uses_other_template() {
    assert_eq!(
        reply("angie docs nonsense").as_deref(),
        Some(
            "Aww, bummer :anguished: Looks like you wanted docs for _nonsense_, but I couldn't \
             find anything. Might be a good idea to look directly at \
             [API Reference](https://angular.io/docs/ts/latest/api/)! :grin:"
        )
    );
}

#[test]
fn test_ignores_messages_not_for_the_bot() {
    assert_eq!(reply("hello people"), None);
}

#[test]
fn test_ignores_chatter_about_the_bot() {
    assert_eq!(reply("Angie's replies are great"), None);
    assert_eq!(reply("Angie-bot is down again"), None);
}

#[test]
fn test_greeting_with_non_breaking_space() {
    assert_eq!(reply("Hey\u{00a0}Angie, version"), reply("angie version"));
}

#[test]
fn test_handles_unknown_command() {
    assert_eq!(
        reply("Hey Angie, what's up?").as_deref(),
        Some(
            "Based on `Hey Angie,` I figured you were actually giving me command for `angie`, \
             but I have no idea what you mean by `what's up?`. I was expecting something of \
             the following: `help`, `docs`, `events`, `version`. Maybe you made a typo, or my \
             creators @Toxicable and @lazarljubenovic made a mistake creating me! :sweat_smile:"
        )
    );
}

#[test]
fn test_events_and_help() {
    let events = reply("angie events space").expect("events reply");
    assert!(events.contains("**conf name with a space** in some spacey place"));
    assert!(!events.contains("**conf-name-2**"));

    let help = reply("angie help").expect("help reply");
    assert!(help.starts_with("Here's what I can do:\n- `help`"));
    assert!(help.contains("- `version`: Show the latest release"));
}

#[test]
fn test_extra_whitespace_still_resolves() {
    assert_eq!(
        reply("angie    docs     AsyncPipe"),
        reply("angie docs AsyncPipe")
    );
}

#[test]
fn test_repeated_unmatched_input_is_stable() {
    let angie = angie();
    let msg = Message::from_text("nobody here but us");
    let first = angie.get_reply(&msg);
    for _ in 0..3 {
        assert_eq!(angie.get_reply(&msg), first);
    }
    assert_eq!(first, None);
}
