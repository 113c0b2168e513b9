mod authoring;
mod catalog;
mod clock;
mod config;
mod error;
mod id;
mod kv;
mod store;
mod story;

#[cfg(feature = "genai")]
pub mod genai;
#[cfg(feature = "media")]
pub mod media;

pub use authoring::{
    display_date, preset_avatar_url, preset_id_from_seed, AvatarChoice, StoryDraft, StoryForm,
    FALLBACK_PRESET_ID, PRESET_AVATAR_COUNT,
};
pub use catalog::DefaultCatalog;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{StoreConfig, ANONYMOUS, DEFAULT_AVATAR, STORAGE_KEY, UNTITLED};
#[cfg(feature = "genai")]
pub use config::{
    GenAiConfig, API_KEY_VAR, BASE_URL_VAR, CHAT_MODEL, DEFAULT_BASE_URL, DRAFT_MODEL,
    IMAGE_MODEL, SYSTEM_INSTRUCTION,
};
#[cfg(feature = "genai")]
pub use error::{CredentialError, GenAiError, StudioError};
#[cfg(feature = "media")]
pub use error::MediaError;
pub use error::{KvError, StoreError};
pub use id::IdGenerator;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
#[cfg(feature = "emitter")]
pub use store::{STORIES_CLEARED, STORY_CREATED, STORY_DELETED, STORY_FORKED, STORY_UPDATED};
pub use store::{looks_custom, Ownership, StoryStore, UpdateOutcome, LEGACY_DEFAULT_ID_MAX_LEN};
pub use story::{
    derive_excerpt, first_image, image_marker, parse_content, ContentBlock, KindPolicy,
    PartialStory, Sanitizer, Story, StoryKind, ELLIPSIS, EXCERPT_CHARS,
};

// Re-export the EventEmitter so listeners can be prepared before building a store
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
