//! StoryStore - locally authored stories overlaid on the bundled catalog.
//!
//! Custom stories live as one JSON array, newest first, under a single key of
//! a [`KeyValueStore`]. Every mutation is a read-modify-write of that array.
//! The catalog is never written: editing a default story forks a new custom
//! record, and deleting one has no effect.
//!
//! ## Example
//!
//! ```ignore
//! use slow_listen::{InMemoryKeyValueStore, PartialStory, StoryStore};
//!
//! let store = StoryStore::new(InMemoryKeyValueStore::new());
//! let story = store.create(PartialStory::new().with_title("T").with_content("hello world"))?;
//! assert!(store.is_custom(&story.id));
//! assert_eq!(store.all_stories()[0], story);
//! ```

#[cfg(feature = "emitter")]
mod events;
mod identity;

use std::sync::Arc;
#[cfg(feature = "emitter")]
use std::sync::Mutex;

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::catalog::DefaultCatalog;
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::story::{PartialStory, Sanitizer, Story};

#[cfg(feature = "emitter")]
use events::StoryEvent;
#[cfg(feature = "emitter")]
pub use events::{STORIES_CLEARED, STORY_CREATED, STORY_DELETED, STORY_FORKED, STORY_UPDATED};
pub use identity::{looks_custom, Ownership, LEGACY_DEFAULT_ID_MAX_LEN};

/// Result of [`StoryStore::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The custom record was replaced in place.
    Replaced(Story),
    /// The target was not a custom record; a new one was created instead.
    Forked(Story),
}

impl UpdateOutcome {
    pub fn story(&self) -> &Story {
        match self {
            UpdateOutcome::Replaced(story) | UpdateOutcome::Forked(story) => story,
        }
    }

    pub fn into_story(self) -> Story {
        match self {
            UpdateOutcome::Replaced(story) | UpdateOutcome::Forked(story) => story,
        }
    }

    pub fn is_fork(&self) -> bool {
        matches!(self, UpdateOutcome::Forked(_))
    }
}

pub struct StoryStore<S> {
    kv: S,
    key: String,
    catalog: Arc<DefaultCatalog>,
    sanitizer: Sanitizer,
    #[cfg(feature = "emitter")]
    emitter: Mutex<EventEmitter>,
}

impl<S: KeyValueStore> StoryStore<S> {
    /// Store over `kv` with the bundled catalog, default config and the system clock.
    pub fn new(kv: S) -> Self {
        Self::with_parts(
            kv,
            StoreConfig::default(),
            Arc::new(DefaultCatalog::bundled()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_config(kv: S, config: StoreConfig) -> Self {
        Self::with_parts(
            kv,
            config,
            Arc::new(DefaultCatalog::bundled()),
            Arc::new(SystemClock),
        )
    }

    pub fn with_parts(
        kv: S,
        config: StoreConfig,
        catalog: Arc<DefaultCatalog>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        // Generated ids must be longer than every bundled id.
        let min_id_len = catalog.max_id_len() + 1;
        Self {
            kv,
            key: config.storage_key.clone(),
            sanitizer: Sanitizer::new(&config, clock, min_id_len),
            catalog,
            #[cfg(feature = "emitter")]
            emitter: Mutex::new(EventEmitter::new()),
        }
    }

    /// Replace the event emitter, keeping any listeners already registered on it.
    #[cfg(feature = "emitter")]
    pub fn with_emitter(mut self, emitter: EventEmitter) -> Self {
        self.emitter = Mutex::new(emitter);
        self
    }

    /// Register a listener for a store event (e.g. [`STORY_CREATED`]).
    /// Returns the listener id.
    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event: &str, listener: F) -> Option<String>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        match self.emitter.lock() {
            Ok(mut emitter) => Some(emitter.on(event, listener)),
            Err(_) => {
                tracing::error!(event, "event emitter lock poisoned, listener dropped");
                None
            }
        }
    }

    pub fn catalog(&self) -> &DefaultCatalog {
        &self.catalog
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Complete a partial record with the store's defaults.
    pub fn sanitize(&self, partial: impl Into<PartialStory>) -> Story {
        self.sanitizer.sanitize(partial.into())
    }

    /// Custom stories, newest first.
    ///
    /// Absent, unreadable or corrupt data reads as no custom stories.
    pub fn list_custom(&self) -> Vec<Story> {
        let raw = match self.kv.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to read custom stories");
                return Vec::new();
            }
        };

        let records: Vec<PartialStory> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to parse custom stories");
                return Vec::new();
            }
        };

        let mut repaired = 0usize;
        let stories: Vec<Story> = records
            .into_iter()
            .map(|record| {
                if record.id.as_deref().map_or(true, str::is_empty) {
                    repaired += 1;
                }
                self.sanitizer.sanitize_stored(record)
            })
            .collect();

        // Ids handed out on read must stay stable, so store them once.
        if repaired > 0 {
            tracing::warn!(key = %self.key, repaired, "assigned ids to stored stories without one");
            if let Err(e) = self.persist(&stories) {
                tracing::error!(key = %self.key, error = %e, "failed to store repaired ids");
            }
        }
        tracing::debug!(key = %self.key, count = stories.len(), "loaded custom stories");
        stories
    }

    /// Sanitize `partial`, assign it an id if it has none, and store it in
    /// front of the existing custom stories.
    ///
    /// A supplied id already used by a custom or default story is replaced by
    /// a fresh one.
    pub fn create(&self, partial: impl Into<PartialStory>) -> Result<Story, StoreError> {
        let mut partial = partial.into();
        let mut stories = self.list_custom();

        let taken = partial
            .id
            .as_deref()
            .is_some_and(|id| self.catalog.contains(id) || stories.iter().any(|s| s.id == id));
        if taken {
            let id = partial.id.take().unwrap_or_default();
            tracing::warn!(id = %id, "story id already in use, issuing a fresh one");
        }
        let story = self.sanitizer.sanitize(partial);
        stories.insert(0, story.clone());
        self.persist(&stories)?;

        tracing::debug!(id = %story.id, "created story");
        #[cfg(feature = "emitter")]
        self.emit(StoryEvent::Created(&story));
        Ok(story)
    }

    /// Replace the custom record with the same id, or fork a new custom record
    /// when the id is not a custom one (e.g. a default story was edited).
    ///
    /// A replaced record keeps its original date. A fork gets a new id and a
    /// new date.
    pub fn update(&self, story: impl Into<PartialStory>) -> Result<UpdateOutcome, StoreError> {
        let mut partial = story.into();
        let mut stories = self.list_custom();

        let position = partial
            .id
            .as_deref()
            .and_then(|id| stories.iter().position(|s| s.id == id));

        match position {
            Some(index) => {
                partial.date = Some(stories[index].date.clone());
                let replaced = self.sanitizer.sanitize(partial);
                stories[index] = replaced.clone();
                self.persist(&stories)?;

                tracing::debug!(id = %replaced.id, "updated story");
                #[cfg(feature = "emitter")]
                self.emit(StoryEvent::Updated(&replaced));
                Ok(UpdateOutcome::Replaced(replaced))
            }
            None => {
                let source = partial.id.take();
                partial.date = None;
                let forked = self.sanitizer.sanitize(partial);
                stories.insert(0, forked.clone());
                self.persist(&stories)?;

                tracing::warn!(
                    source = source.as_deref().unwrap_or(""),
                    id = %forked.id,
                    "story is not custom, forked a new record"
                );
                #[cfg(feature = "emitter")]
                self.emit(StoryEvent::Forked(&forked));
                Ok(UpdateOutcome::Forked(forked))
            }
        }
    }

    /// Remove the custom record with this id. Returns true if one was removed.
    ///
    /// Default story ids are left untouched and stay visible.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut stories = self.list_custom();
        let before = stories.len();
        stories.retain(|story| story.id != id);
        let removed = stories.len() < before;
        self.persist(&stories)?;

        if removed {
            tracing::debug!(id, "deleted story");
            #[cfg(feature = "emitter")]
            self.emit(StoryEvent::Deleted(id));
        } else if self.catalog.contains(id) {
            tracing::debug!(id, "default stories cannot be deleted");
        }
        Ok(removed)
    }

    /// Drop every custom story. Returns true if any data was stored.
    pub fn clear_custom(&self) -> Result<bool, StoreError> {
        let existed = self.kv.remove(&self.key).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to clear custom stories");
            StoreError::from(e)
        })?;
        #[cfg(feature = "emitter")]
        if existed {
            self.emit(StoryEvent::Cleared);
        }
        Ok(existed)
    }

    /// Custom stories (newest first) followed by the catalog, in its order.
    pub fn all_stories(&self) -> Vec<Story> {
        let mut stories = self.list_custom();
        stories.extend(self.catalog.stories().iter().cloned());
        stories
    }

    /// First story with this id in [`all_stories`](Self::all_stories) order.
    pub fn find(&self, id: &str) -> Option<Story> {
        self.list_custom()
            .into_iter()
            .find(|story| story.id == id)
            .or_else(|| self.catalog.get(id).cloned())
    }

    /// Whether the id belongs to a record in the custom store.
    pub fn is_custom(&self, id: &str) -> bool {
        self.list_custom().iter().any(|story| story.id == id)
    }

    pub fn ownership(&self, id: &str) -> Ownership {
        if self.is_custom(id) {
            Ownership::Custom
        } else if self.catalog.contains(id) {
            Ownership::Default
        } else {
            Ownership::Unknown
        }
    }

    fn persist(&self, stories: &[Story]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(stories).map_err(|e| {
            tracing::error!(key = %self.key, error = %e, "failed to serialize custom stories");
            StoreError::from(e)
        })?;
        self.kv.set(&self.key, &raw).map_err(|e| {
            tracing::error!(
                key = %self.key,
                bytes = raw.len(),
                error = %e,
                "failed to write custom stories"
            );
            StoreError::from(e)
        })
    }

    #[cfg(feature = "emitter")]
    fn emit(&self, event: StoryEvent<'_>) {
        match self.emitter.lock() {
            Ok(mut emitter) => event.emit(&mut emitter),
            Err(_) => tracing::error!("event emitter lock poisoned, event dropped"),
        }
    }
}
