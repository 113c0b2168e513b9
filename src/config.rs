//! Configuration for the story store and the generative-AI client.
//!
//! Both configs start from the site's defaults and are adjusted with
//! `with_*` builders:
//!
//! ```ignore
//! let config = StoreConfig::default()
//!     .with_storage_key("preview_stories")
//!     .with_kind_policy(KindPolicy::Preserve);
//! ```

use crate::story::KindPolicy;

/// Storage key holding the serialized custom stories.
pub const STORAGE_KEY: &str = "slow_listen_custom_stories";

/// Avatar used when an authored story has none.
pub const DEFAULT_AVATAR: &str = "https://images.unsplash.com/photo-1534528741775-53994a69daeb?auto=format&fit=crop&q=80&w=100&h=100";

/// Title used when an authored story has none.
pub const UNTITLED: &str = "無標題";

/// Author used when an authored story has none.
pub const ANONYMOUS: &str = "匿名";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    pub default_avatar: String,
    pub untitled: String,
    pub anonymous: String,
    pub kind_policy: KindPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            default_avatar: DEFAULT_AVATAR.to_string(),
            untitled: UNTITLED.to_string(),
            anonymous: ANONYMOUS.to_string(),
            kind_policy: KindPolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_default_avatar(mut self, url: impl Into<String>) -> Self {
        self.default_avatar = url.into();
        self
    }

    pub fn with_untitled(mut self, title: impl Into<String>) -> Self {
        self.untitled = title.into();
        self
    }

    pub fn with_anonymous(mut self, author: impl Into<String>) -> Self {
        self.anonymous = author.into();
        self
    }

    pub fn with_kind_policy(mut self, policy: KindPolicy) -> Self {
        self.kind_policy = policy;
        self
    }
}

#[cfg(feature = "genai")]
pub use genai::*;

#[cfg(feature = "genai")]
mod genai {
    use std::env;

    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    pub const CHAT_MODEL: &str = "gemini-3-pro-preview";
    pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";
    pub const DRAFT_MODEL: &str = "gemini-2.5-flash";
    pub const SYSTEM_INSTRUCTION: &str = "You are a wise, calm, and poetic assistant for the 'Slow and Listen' exhibition. Your tone is warm, empathetic, and slightly literary. You help users reflect on the themes of listening, patience, and rhythm.";

    /// Environment variable holding the API key.
    pub const API_KEY_VAR: &str = "API_KEY";
    /// Environment variable overriding the service base URL.
    pub const BASE_URL_VAR: &str = "GENAI_BASE_URL";

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct GenAiConfig {
        pub api_key: Option<String>,
        pub base_url: String,
        pub chat_model: String,
        pub image_model: String,
        pub draft_model: String,
        pub system_instruction: String,
    }

    impl Default for GenAiConfig {
        fn default() -> Self {
            Self {
                api_key: None,
                base_url: DEFAULT_BASE_URL.to_string(),
                chat_model: CHAT_MODEL.to_string(),
                image_model: IMAGE_MODEL.to_string(),
                draft_model: DRAFT_MODEL.to_string(),
                system_instruction: SYSTEM_INSTRUCTION.to_string(),
            }
        }
    }

    impl GenAiConfig {
        /// Defaults, with the API key and base URL taken from the environment
        /// when set.
        pub fn from_env() -> Self {
            let mut config = Self::default();
            config.api_key = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty());
            if let Ok(base_url) = env::var(BASE_URL_VAR) {
                if !base_url.is_empty() {
                    config.base_url = base_url;
                }
            }
            config
        }

        pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
            self.api_key = Some(key.into());
            self
        }

        pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
            self.base_url = url.into();
            self
        }

        pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
            self.chat_model = model.into();
            self
        }

        pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
            self.image_model = model.into();
            self
        }

        pub fn with_draft_model(mut self, model: impl Into<String>) -> Self {
            self.draft_model = model.into();
            self
        }

        pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
            self.system_instruction = instruction.into();
            self
        }
    }
}
