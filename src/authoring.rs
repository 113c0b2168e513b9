//! StoryForm - the state behind the write/edit story dialog.
//!
//! The form is filled by hand, from an AI draft, or from an existing story
//! when editing. Saving a form built from an existing story goes through
//! [`StoryStore::update`], so editing a bundled story forks it.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::story::{image_marker, PartialStory, Sanitizer, Story, StoryKind};
use crate::store::StoryStore;

/// Number of preset avatars to pick from.
pub const PRESET_AVATAR_COUNT: u64 = 200;

/// Preset kept when an edited story's avatar is not a preset or an upload.
pub const FALLBACK_PRESET_ID: &str = "10";

static PRESET_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/id/(\d+)/").expect("preset id pattern is valid"));

/// URL of a preset avatar.
pub fn preset_avatar_url(id: &str) -> String {
    format!("https://picsum.photos/id/{}/200/200", id)
}

/// Preset avatar id derived from an arbitrary seed (e.g. the current time).
pub fn preset_id_from_seed(seed: u64) -> String {
    (seed % PRESET_AVATAR_COUNT).to_string()
}

/// Display date for a new story, e.g. `OCT 19, 2026`.
pub fn display_date(sanitizer: &Sanitizer) -> String {
    sanitizer
        .clock()
        .now()
        .format("%b %d, %Y")
        .to_string()
        .to_uppercase()
}

/// Where the story's avatar comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarChoice {
    /// One of the preset avatars, by id.
    Preset(String),
    /// An uploaded image, as a data URI.
    Upload(String),
}

impl AvatarChoice {
    pub fn url(&self) -> String {
        match self {
            AvatarChoice::Preset(id) => preset_avatar_url(id),
            AvatarChoice::Upload(uri) => uri.clone(),
        }
    }

    /// Recover the choice from a stored avatar URL.
    ///
    /// Returns `None` for remote URLs that are not preset avatars.
    pub fn from_url(url: &str) -> Option<Self> {
        if url.starts_with("data:") {
            return Some(AvatarChoice::Upload(url.to_string()));
        }
        PRESET_ID
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| AvatarChoice::Preset(m.as_str().to_string()))
    }
}

/// Story fields produced by the drafting service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: StoryKind,
    pub excerpt: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryForm {
    pub title: String,
    pub author: String,
    pub kind: StoryKind,
    pub excerpt: String,
    pub content: String,
    pub avatar: AvatarChoice,
}

impl StoryForm {
    /// Blank form with the given preset avatar.
    pub fn new(preset_id: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            kind: StoryKind::Story,
            excerpt: String::new(),
            content: String::new(),
            avatar: AvatarChoice::Preset(preset_id.into()),
        }
    }

    /// Form pre-filled from an existing story.
    ///
    /// A remote avatar that is not a preset keeps the form's default preset,
    /// the same as the dialog does.
    pub fn edit(story: &Story) -> Self {
        let avatar = AvatarChoice::from_url(&story.avatar_url)
            .unwrap_or_else(|| AvatarChoice::Preset(FALLBACK_PRESET_ID.to_string()));
        Self {
            title: story.title.clone(),
            author: story.author.clone().unwrap_or_default(),
            kind: story.kind,
            excerpt: story.excerpt.clone(),
            content: story.content.clone(),
            avatar,
        }
    }

    /// Overwrite the text fields with an AI draft.
    pub fn apply_draft(&mut self, draft: StoryDraft) {
        self.title = draft.title;
        self.author = draft.author;
        self.kind = draft.kind;
        self.excerpt = draft.excerpt;
        self.content = draft.content;
    }

    pub fn set_uploaded_avatar(&mut self, data_uri: impl Into<String>) {
        self.avatar = AvatarChoice::Upload(data_uri.into());
    }

    /// Replace the selected range of the content (character offsets, as a text
    /// cursor reports them) with an image paragraph.
    pub fn insert_content_image(&mut self, selection: Range<usize>, uri: &str) {
        let start = char_to_byte(&self.content, selection.start);
        let end = char_to_byte(&self.content, selection.end.max(selection.start));
        let block = image_block(uri);
        self.content.replace_range(start..end, &block);
    }

    /// Append an image paragraph when no cursor position is known.
    pub fn append_content_image(&mut self, uri: &str) {
        self.content.push_str(&image_block(uri));
    }

    /// The record to save. Editing keeps the original id and date; a new story
    /// gets a fresh id and today's display date.
    pub fn to_partial(&self, initial: Option<&Story>, sanitizer: &Sanitizer) -> PartialStory {
        let (id, date) = match initial {
            Some(story) => (story.id.clone(), story.date.clone()),
            None => (sanitizer.fresh_id(), display_date(sanitizer)),
        };
        PartialStory {
            id: Some(id),
            kind: Some(self.kind),
            title: Some(self.title.clone()),
            author: Some(self.author.clone()),
            avatar_url: Some(self.avatar.url()),
            excerpt: Some(self.excerpt.clone()),
            content: Some(self.content.clone()),
            date: Some(date),
        }
    }

    /// Create or update through the store.
    pub fn save<S: KeyValueStore>(
        &self,
        store: &StoryStore<S>,
        initial: Option<&Story>,
    ) -> Result<Story, StoreError> {
        let partial = self.to_partial(initial, store.sanitizer());
        match initial {
            Some(_) => store.update(partial).map(|outcome| outcome.into_story()),
            None => store.create(partial),
        }
    }
}

fn image_block(uri: &str) -> String {
    format!("\n\n{}\n\n", image_marker(uri))
}

fn char_to_byte(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}
