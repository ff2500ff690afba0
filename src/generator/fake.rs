//! Fake generator for tests and offline runs.
//!
//! Responses are matched by checking whether the prompt contains a registered
//! substring; the first registered match wins.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

use super::{ContentGenerator, ImageInput};
use crate::error::{GourmetError, Result};

#[derive(Debug, Default)]
pub struct FakeGenerator {
    responses: Vec<(String, String)>,
    default_response: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator that answers every prompt with `response`
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Answer prompts containing `prompt_contains` with `response`
    pub fn with_response(mut self, prompt_contains: &str, response: &str) -> Self {
        self.responses
            .push((prompt_contains.to_string(), response.to_string()));
        self
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.recorded().clone()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<String>> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn respond(&self, prompt: &str) -> Result<String> {
        self.recorded().push(prompt.to_string());

        self.responses
            .iter()
            .find(|(pattern, _)| prompt.contains(pattern.as_str()))
            .map(|(_, response)| response.clone())
            .or_else(|| self.default_response.clone())
            .ok_or(GourmetError::EmptyResponse)
    }
}

#[async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.respond(prompt)
    }

    async fn generate_with_image(&self, prompt: &str, _image: &ImageInput) -> Result<String> {
        self.respond(prompt)
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_matches_registered_substring() {
        let generator = FakeGenerator::new()
            .with_response("ingredient list", "Egg: 2")
            .with_default_response("Recipe Name: Toast");

        let matched = generator
            .generate("Analyze the following ingredient list: eggs")
            .await
            .expect("Expected a response");
        let fallback = generator
            .generate("Generate a recipe")
            .await
            .expect("Expected default response");

        assert_eq!(matched, "Egg: 2");
        assert_eq!(fallback, "Recipe Name: Toast");
        assert_eq!(generator.prompts().len(), 2);
    }

    #[tokio::test]
    async fn test_fake_without_match_is_empty_response() {
        let generator = FakeGenerator::new();

        let result = generator.generate("anything").await;

        assert!(matches!(result, Err(GourmetError::EmptyResponse)));
        assert_eq!(generator.prompts(), vec!["anything".to_string()]);
    }
}
