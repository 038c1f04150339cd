use std::borrow::Cow;
use std::fmt;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

pub enum GenerationError {
    Network(reqwest::Error),
    Google(Error),
}

impl From<reqwest::Error> for GenerationError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content<'a>],
    system_instruction: Option<Content<'a>>,
}

#[derive(Clone, Serialize)]
pub struct Content<'a> {
    pub parts: Cow<'a, [Part<'a>]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
}

#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Part<'a> {
    Text(Cow<'a, str>),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<ContentResponse>,
    pub finish_reason: Option<String>,
}

#[derive(Deserialize)]
pub struct ContentResponse {
    #[serde(default)]
    pub parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
pub struct PartResponse {
    pub text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

#[derive(Deserialize)]
pub struct SafetyRating {
    pub category: String,
    #[serde(default)]
    pub blocked: bool,
}

#[derive(Deserialize)]
pub struct ErrorResponse {
    pub error: Error,
}

#[derive(Debug, Deserialize)]
pub struct Error {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub status: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status.is_empty() {
            write!(f, "Google error {}: {}", self.code, self.message)
        } else {
            write!(f, "Google error {} ({}): {}", self.code, self.status, self.message)
        }
    }
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. The error describes why
    /// there is no text to show.
    pub fn into_text(self) -> Result<String, String> {
        if let Some(block_reason) =
            self.prompt_feedback.as_ref().and_then(|feedback| feedback.block_reason.as_ref())
        {
            let categories = self
                .prompt_feedback
                .iter()
                .flat_map(|feedback| &feedback.safety_ratings)
                .filter(|rating| rating.blocked)
                .map(|rating| rating.category.as_str())
                .collect::<Vec<_>>();

            return Err(if categories.is_empty() {
                format!("request blocked by Google ({block_reason}).")
            } else {
                format!("request blocked by Google: {}.", categories.join(", "))
            });
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err("no response generated.".into());
        };

        let text = candidate
            .content
            .map(|content| {
                content.parts.into_iter().filter_map(|part| part.text).collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(candidate.finish_reason.map_or_else(
                || "no text generated.".into(),
                |finish_reason| format!("no text generated (finish reason: {finish_reason})."),
            ));
        }

        Ok(text)
    }
}

pub async fn generate_content(
    http_client: &reqwest::Client,
    api_key: &str,
    model: &str,
    contents: &[Content<'_>],
    system_instruction: Option<Content<'_>>,
) -> Result<GenerateContentResponse, GenerationError> {
    let url =
        format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent");

    let url = Url::parse_with_params(&url, [("key", api_key)])
        .map_err(|err| GenerationError::Google(invalid_url(&err)))?;

    let response = http_client
        .post(url)
        .json(&GenerateContentRequest { contents, system_instruction })
        .send()
        .await?;

    if response.status() != StatusCode::OK {
        let status = response.status();
        let error = match response.json::<ErrorResponse>().await {
            Ok(error_response) => error_response.error,
            Err(_) => Error {
                code: status.as_u16(),
                message: status.canonical_reason().unwrap_or("unknown error").into(),
                status: String::new(),
            },
        };

        return Err(GenerationError::Google(error));
    }

    Ok(response.json().await?)
}

fn invalid_url(err: &url::ParseError) -> Error {
    Error { code: 0, message: format!("invalid model name: {err}"), status: String::new() }
}
