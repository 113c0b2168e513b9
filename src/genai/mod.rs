//! Generative-AI services - chat, story drafting and image generation.
//!
//! Each capability is a trait so the site (and its tests) can swap the
//! backend. [`GeminiClient`] implements all three against the
//! generative-language REST API. Requires the `genai` feature.
//!
//! ## Example
//!
//! ```ignore
//! use slow_listen::genai::{ChatSession, GeminiClient, ImageSize, ImageService};
//!
//! let client = GeminiClient::from_env();
//! let mut chat = ChatSession::new(client.clone());
//! let reply = chat.send("What does patience sound like?").await;
//!
//! let image = client.generate_image("a calm lake at dawn", ImageSize::TwoK).await?;
//! ```

mod chat;
mod client;
mod credential;
mod draft;
mod image;
mod studio;
pub mod wire;

pub use chat::{ChatMessage, ChatService, ChatSession, Role, CHAT_FALLBACK, EMPTY_REPLY};
pub use client::GeminiClient;
pub use credential::{CredentialPort, StaticCredential, Unsupported};
pub use draft::{draft_prompt, draft_schema, parse_draft, DraftService};
pub use image::{ImageService, ImageSize};
pub use studio::ImageStudio;
