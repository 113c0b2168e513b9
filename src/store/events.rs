//! Change notifications fired after successful store writes.
//!
//! Listeners receive the JSON of the affected story, or the bare id for
//! deletions. Requires the `emitter` feature.

use event_emitter_rs::EventEmitter;
use serde::Serialize;

use crate::story::Story;

pub const STORY_CREATED: &str = "StoryCreated";
pub const STORY_UPDATED: &str = "StoryUpdated";
pub const STORY_FORKED: &str = "StoryForked";
pub const STORY_DELETED: &str = "StoryDeleted";
pub const STORIES_CLEARED: &str = "StoriesCleared";

pub(crate) enum StoryEvent<'a> {
    Created(&'a Story),
    Updated(&'a Story),
    Forked(&'a Story),
    Deleted(&'a str),
    Cleared,
}

impl StoryEvent<'_> {
    fn name(&self) -> &'static str {
        match self {
            StoryEvent::Created(_) => STORY_CREATED,
            StoryEvent::Updated(_) => STORY_UPDATED,
            StoryEvent::Forked(_) => STORY_FORKED,
            StoryEvent::Deleted(_) => STORY_DELETED,
            StoryEvent::Cleared => STORIES_CLEARED,
        }
    }

    fn payload(&self) -> String {
        match self {
            StoryEvent::Created(story) | StoryEvent::Updated(story) | StoryEvent::Forked(story) => {
                to_json(story)
            }
            StoryEvent::Deleted(id) => id.to_string(),
            StoryEvent::Cleared => String::new(),
        }
    }

    pub(crate) fn emit(&self, emitter: &mut EventEmitter) {
        let _ = emitter.emit(self.name(), self.payload());
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!(error = %e, "failed to encode story event payload");
            String::new()
        }
    }
}
