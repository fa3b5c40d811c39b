//! Reply builder - accumulates markdown fragments for a chat reply

use std::fmt;

/// A renderable reply. Fragments are concatenated in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    fragments: Vec<String>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply holding a single plain fragment
    pub fn message(text: impl Into<String>) -> Self {
        Self::new().text(text)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.fragments.push(text);
        }
        self
    }

    pub fn bold(self, text: impl AsRef<str>) -> Self {
        self.text(format!("**{}**", text.as_ref()))
    }

    pub fn italic(self, text: impl AsRef<str>) -> Self {
        self.text(format!("*{}*", text.as_ref()))
    }

    pub fn code(self, text: impl AsRef<str>) -> Self {
        self.text(format!("`{}`", text.as_ref()))
    }

    pub fn link(self, label: impl AsRef<str>, url: impl AsRef<str>) -> Self {
        self.text(format!("[{}]({})", label.as_ref(), url.as_ref()))
    }

    pub fn emoji(self, name: impl AsRef<str>) -> Self {
        self.text(format!(":{}:", name.as_ref()))
    }

    /// Append another reply's fragments
    pub fn append(mut self, other: Reply) -> Self {
        self.fragments.extend(other.fragments);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// `None` when nothing was written
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            f.write_str(fragment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_fragments_in_order() {
        let reply = Reply::new()
            .text("see ")
            .link(format!("**{}**", "docs"), "https://angular.io")
            .text(" for ")
            .code("AsyncPipe");
        assert_eq!(reply.to_string(), "see [**docs**](https://angular.io) for `AsyncPipe`");
    }

    #[test]
    fn test_empty_reply_is_no_reply() {
        let reply = Reply::new().text("");
        assert!(reply.is_empty());
        assert_eq!(reply.to_string(), "");
        assert!(reply.non_empty().is_none());
    }

    #[test]
    fn test_append_and_emoji() {
        let reply = Reply::message("hi ").append(Reply::new().emoji("grin"));
        assert_eq!(reply.to_string(), "hi :grin:");
    }
}
