//! Sanitizer - fills omitted story fields with defaults before persisting.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::StoreConfig;
use crate::id::IdGenerator;

use super::{KindPolicy, PartialStory, Story, StoryKind};

/// Number of content characters kept in a derived excerpt.
pub const EXCERPT_CHARS: usize = 50;

/// Appended to a derived excerpt when content was cut.
pub const ELLIPSIS: &str = "...";

/// Completes [`PartialStory`] values into [`Story`] records.
///
/// Applying it to its own output yields the same record.
pub struct Sanitizer {
    untitled: String,
    anonymous: String,
    default_avatar: String,
    kind_policy: KindPolicy,
    ids: IdGenerator,
    clock: Arc<dyn Clock>,
}

impl Sanitizer {
    /// `min_id_len` is the shortest id the generator may hand out; the store
    /// passes one more than the longest default id.
    pub fn new(config: &StoreConfig, clock: Arc<dyn Clock>, min_id_len: usize) -> Self {
        Self {
            untitled: config.untitled.clone(),
            anonymous: config.anonymous.clone(),
            default_avatar: config.default_avatar.clone(),
            kind_policy: config.kind_policy,
            ids: IdGenerator::new(min_id_len),
            clock,
        }
    }

    /// Complete a record about to be written, applying the kind policy.
    pub fn sanitize(&self, partial: PartialStory) -> Story {
        let kind = match self.kind_policy {
            KindPolicy::ForceStory => StoryKind::Story,
            KindPolicy::Preserve => partial.kind.unwrap_or_default(),
        };
        self.complete(partial, kind)
    }

    /// Complete a record read back from storage. Only missing fields are
    /// filled; a stored kind is kept whatever the policy.
    pub fn sanitize_stored(&self, partial: PartialStory) -> Story {
        let kind = partial.kind.unwrap_or_default();
        self.complete(partial, kind)
    }

    fn complete(&self, partial: PartialStory, kind: StoryKind) -> Story {
        let content = partial.content.unwrap_or_default();
        Story {
            id: non_empty(partial.id).unwrap_or_else(|| self.fresh_id()),
            kind,
            title: non_empty(partial.title).unwrap_or_else(|| self.untitled.clone()),
            excerpt: non_empty(partial.excerpt).unwrap_or_else(|| derive_excerpt(&content)),
            author: Some(non_empty(partial.author).unwrap_or_else(|| self.anonymous.clone())),
            avatar_url: non_empty(partial.avatar_url)
                .unwrap_or_else(|| self.default_avatar.clone()),
            date: non_empty(partial.date).unwrap_or_else(|| self.today()),
            content,
        }
    }

    pub fn fresh_id(&self) -> String {
        self.ids.next(self.clock.as_ref())
    }

    /// Today's date as `YYYY-MM-DD`.
    pub fn today(&self) -> String {
        self.clock.now().format("%Y-%m-%d").to_string()
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn min_id_len(&self) -> usize {
        self.ids.min_len()
    }
}

/// First [`EXCERPT_CHARS`] characters of `content`, plus [`ELLIPSIS`] when cut.
pub fn derive_excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], ELLIPSIS),
        None => content.to_string(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
