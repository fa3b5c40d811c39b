//! Release lookup - `version`

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::command::{CommandNodeBuilder, CommandSubtree};
use crate::domain::entities::Reply;
use crate::domain::traits::CommandProvider;

pub const DEFAULT_REPOSITORY: &str = "angular/angular";

/// Git tag as returned by the GitHub tags API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub zipball_url: String,
    #[serde(default)]
    pub tarball_url: String,
    pub commit: CommitRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CommitRef {
    pub sha: String,
    #[serde(default)]
    pub url: String,
}

/// `major.minor.patch[-pre]`, with an optional leading `v`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Option<String>,
}

impl Version {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.strip_prefix('v').unwrap_or(text);
        let (core, pre) = match text.split_once('-') {
            Some((core, pre)) if !pre.is_empty() => (core, Some(pre.to_string())),
            Some(_) => return None,
            None => (text, None),
        };

        let mut parts = core.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        let patch = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self { major, minor, patch, pre })
    }

    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => compare_pre(a, b),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dot-separated identifiers; numeric ones compare numerically and sort first
fn compare_pre(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

/// Latest stable release and, if newer, the latest prerelease
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary<'a> {
    pub stable: Option<&'a Tag>,
    pub prerelease: Option<&'a Tag>,
}

pub fn summarize(tags: &[Tag]) -> ReleaseSummary<'_> {
    let parsed: Vec<(Version, &Tag)> = tags
        .iter()
        .filter_map(|tag| Version::parse(&tag.name).map(|v| (v, tag)))
        .collect();

    let stable = parsed
        .iter()
        .filter(|(v, _)| !v.is_prerelease())
        .max_by(|(a, _), (b, _)| a.cmp(b));

    let prerelease = parsed
        .iter()
        .filter(|(v, _)| v.is_prerelease())
        .filter(|(v, _)| stable.map_or(true, |(s, _)| v > s))
        .max_by(|(a, _), (b, _)| a.cmp(b));

    ReleaseSummary {
        stable: stable.map(|(_, tag)| *tag),
        prerelease: prerelease.map(|(_, tag)| *tag),
    }
}

pub struct VersionsService {
    repository: String,
    tags: Arc<Vec<Tag>>,
}

impl VersionsService {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self::for_repository(DEFAULT_REPOSITORY, tags)
    }

    pub fn for_repository(repository: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            repository: repository.into(),
            tags: Arc::new(tags),
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn release_reply(&self) -> Reply {
        release_reply(&self.repository, &self.tags)
    }
}

fn release_reply(repository: &str, tags: &[Tag]) -> Reply {
    let repo_url = format!("https://www.github.com/{}", repository);
    let commit_url = |tag: &Tag| format!("{}/commit/{}", repo_url, tag.commit.sha);
    let summary = summarize(tags);

    let header = Reply::new().link(format!("**`{}`**", repository), &repo_url);

    match (summary.stable, summary.prerelease) {
        (None, None) => Reply::message("I couldn't find any releases of ")
            .code(repository)
            .text(" ")
            .emoji("confused"),
        (Some(stable), pre) => {
            let reply = header
                .text(" is at ")
                .link(format!("**{}**", stable.name), commit_url(stable));
            match pre {
                Some(pre) => reply
                    .text(" (and ")
                    .link(&pre.name, commit_url(pre))
                    .text(")"),
                None => reply,
            }
        }
        (None, Some(pre)) => header
            .text(" is at ")
            .link(format!("**{}**", pre.name), commit_url(pre)),
    }
}

impl CommandProvider for VersionsService {
    fn command_subtree(&self) -> CommandSubtree {
        let repository = self.repository.clone();
        let tags = Arc::clone(&self.tags);

        let node = CommandNodeBuilder::new()
            .with_command(r"(?:latest\s+)?(?:versions?|releases?)\b", move |_| {
                Ok(release_reply(&repository, &tags))
            })
            .to_node();

        CommandSubtree::new("version", "Show the latest release", node)
    }
}
