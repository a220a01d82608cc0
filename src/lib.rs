pub mod config;
pub mod controller;
pub mod error;
pub mod gemini;
pub mod links;
pub mod logger;
pub mod models;

pub use config::GeminiConfig;
pub use controller::{GenerationRequestController, GenerationState, Submission};
pub use error::{AtelierError, GenerationError, Result};
pub use gemini::{GeminiClient, ImageClient, ImageGenerator, TextClient};
pub use links::{studio_links, LinkIcon, SocialLink};
pub use models::{GenerationRequest, ImagePayload};
