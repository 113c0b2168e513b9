//! Story records - the single content entity shown on the site.
//!
//! A [`Story`] is either bundled with the application (see
//! [`DefaultCatalog`](crate::DefaultCatalog)) or authored locally and kept in
//! the [`StoryStore`](crate::StoryStore). Authoring produces a
//! [`PartialStory`], which the [`Sanitizer`] completes with defaults before it
//! is persisted.
//!
//! ## Example
//!
//! ```ignore
//! use slow_listen::{PartialStory, StoryKind};
//!
//! let partial = PartialStory::new()
//!     .with_title("Rain on the roof")
//!     .with_content("It started slowly...");
//! let story = sanitizer.sanitize(partial);
//! assert_eq!(story.kind, StoryKind::Story);
//! ```

mod content;
mod sanitize;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use content::{first_image, image_marker, parse_content, ContentBlock};
pub use sanitize::{derive_excerpt, Sanitizer, ELLIPSIS, EXCERPT_CHARS};

/// Kind of card a story renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StoryKind {
    #[default]
    Story,
    Quote,
}

impl StoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoryKind::Story => "STORY",
            StoryKind::Quote => "QUOTE",
        }
    }
}

impl fmt::Display for StoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the sanitizer treats the caller's [`StoryKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindPolicy {
    /// Every record written by the store becomes a [`StoryKind::Story`].
    #[default]
    ForceStory,
    /// Keep the caller's kind, defaulting to [`StoryKind::Story`] when absent.
    Preserve,
}

/// A complete story record, as rendered and as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: StoryKind,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub avatar_url: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
}

impl Story {
    pub fn is_quote(&self) -> bool {
        self.kind == StoryKind::Quote
    }

    /// Image used on the card: the first image embedded in the content,
    /// falling back to the avatar.
    pub fn cover_image(&self) -> &str {
        first_image(&self.content).unwrap_or(&self.avatar_url)
    }

    /// Content split into paragraphs and images.
    pub fn blocks(&self) -> Vec<ContentBlock> {
        parse_content(&self.content)
    }
}

/// A story with any subset of fields filled in.
///
/// Empty strings are treated the same as missing fields when sanitizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialStory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<StoryKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl PartialStory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_kind(mut self, kind: StoryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

impl From<Story> for PartialStory {
    fn from(story: Story) -> Self {
        PartialStory {
            id: Some(story.id),
            kind: Some(story.kind),
            title: Some(story.title),
            author: story.author,
            avatar_url: Some(story.avatar_url),
            excerpt: Some(story.excerpt),
            content: Some(story.content),
            date: Some(story.date),
        }
    }
}
