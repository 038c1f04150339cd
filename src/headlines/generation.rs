use std::borrow::Cow;
use std::error::Error;

use async_trait::async_trait;

use super::HeadlineError;
use super::style::HeadlineStyle;
use crate::apis::google_aistudio::{self, Content, GenerationError, Part};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, topic: &str, style: HeadlineStyle) -> Result<String, HeadlineError>;
}

pub fn system_instruction(style: HeadlineStyle) -> String {
    format!(
        "You are an expert at writing catchy, clickable titles for YouTube videos. \
         Your style must be: '{}'. \
         Answer only with a list of 5 unique variants, without any extra text or commentary.",
        style.label()
    )
}

pub fn user_prompt(topic: &str) -> String {
    format!(
        "Generate 5 headline variants for a YouTube video about the following topic: '{topic}'"
    )
}

pub struct GeminiGenerator {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiGenerator {
    pub const fn new(http_client: reqwest::Client, api_key: Option<String>, model: String) -> Self {
        Self { http_client, api_key, model }
    }
}

#[async_trait]
impl Generator for GeminiGenerator {
    async fn generate(&self, topic: &str, style: HeadlineStyle) -> Result<String, HeadlineError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(HeadlineError::MissingCredential);
        };

        let system_instruction = system_instruction(style);
        let prompt = user_prompt(topic);

        let response = google_aistudio::generate_content(
            &self.http_client,
            api_key,
            &self.model,
            &[Content {
                parts: Cow::Owned(vec![Part::Text(Cow::Owned(prompt))]),
                role: Some("user"),
            }],
            Some(Content {
                parts: Cow::Owned(vec![Part::Text(Cow::Owned(system_instruction))]),
                role: None,
            }),
        )
        .await
        .map_err(map_error)?;

        response.into_text().map_err(HeadlineError::Service)
    }
}

/// The request URL carries the API key, so it is dropped from network errors.
fn map_error(err: GenerationError) -> HeadlineError {
    match err {
        GenerationError::Network(err) => {
            let err = err.without_url();
            let text = err
                .source()
                .map_or_else(|| err.to_string(), |source| format!("{err}: {source}"));
            HeadlineError::Unexpected(text)
        }
        GenerationError::Google(err) => HeadlineError::Service(err.to_string()),
    }
}
