//! Generative content collaborator.
//!
//! Recipe generation and ingredient identification only need "prompt in,
//! text out", so the model behind it is injected through [`ContentGenerator`].

mod fake;
pub mod gemini;

pub use fake::FakeGenerator;
pub use gemini::GeminiGenerator;

use async_trait::async_trait;
use std::fmt;
use std::path::Path;

use crate::error::{GourmetError, Result};

/// An image sent inline with a prompt
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl ImageInput {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }

    /// Read an image from disk, guessing the MIME type from its extension
    pub async fn from_path(path: &Path) -> Result<Self> {
        let mime_type = match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("webp") => "image/webp",
            Some("heic") => "image/heic",
            other => {
                return Err(GourmetError::Config(format!(
                    "Unsupported image type: {}",
                    other.unwrap_or("<none>")
                )));
            }
        };

        let data = tokio::fs::read(path).await?;
        Ok(Self::new(mime_type, data))
    }
}

/// Anything that turns a prompt into generated text.
///
/// Implementations must be thread-safe; they are shared across tasks.
#[async_trait]
pub trait ContentGenerator: Send + Sync + fmt::Debug {
    /// Send a text prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Send a prompt together with an image and return the generated text.
    async fn generate_with_image(&self, prompt: &str, image: &ImageInput) -> Result<String>;

    /// Model name, used in logs.
    fn model_name(&self) -> &str;
}
