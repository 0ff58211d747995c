//! Article synthesizer: glue around a single generative-model call.
//!
//! One request, one response, no retries. A response with no extractable
//! text is fatal for the run; by then nothing has been persisted, so there
//! is nothing to clean up.

pub mod prompt;

use jiff::civil::Date;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::models::{ImageRequest, PlannedArticle};

/// Wire format of the responses endpoint request.
#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

/// Response body, trimmed to the paths text can be extracted from.
#[derive(Debug, Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output_text: Option<String>,
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
struct ContentItem {
    #[serde(default)]
    text: Option<String>,
}

impl ResponsesReply {
    /// `output_text` when present, otherwise the first content text.
    fn into_text(self) -> Option<String> {
        if let Some(text) = self.output_text {
            return Some(text);
        }
        self.output
            .into_iter()
            .next()?
            .content
            .into_iter()
            .next()?
            .text
    }
}

/// Calls the generative text model with structured prompts.
pub struct ArticleSynthesizer {
    client: Client,
    config: PipelineConfig,
}

impl ArticleSynthesizer {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Synthesizes the MDX body for one planned article.
    pub async fn synthesize_article(
        &self,
        article: &PlannedArticle,
        image_hints: &[ImageRequest],
        today: Date,
    ) -> Result<String> {
        let instructions = prompt::article_instructions();
        let input = prompt::article_prompt(article, image_hints, today);
        self.complete(&instructions, &input, self.config.max_output_tokens, None)
            .await
    }

    /// Raw completion call shared by article and plan synthesis.
    ///
    /// Fatal on missing credentials, non-success status, or a response with
    /// no extractable text; the caller must not validate content quality.
    pub async fn complete(
        &self,
        instructions: &str,
        input: &str,
        max_output_tokens: u32,
        temperature: Option<f64>,
    ) -> Result<String> {
        let api_key = self.config.require_model_key()?;
        let url = format!(
            "{}/v1/responses",
            self.config.openai_base_url.trim_end_matches('/')
        );
        let body = ResponsesRequest {
            model: &self.config.model,
            instructions,
            input,
            max_output_tokens,
            temperature,
        };

        debug!("Requesting completion from {} ({})", url, self.config.model);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PipelineError::Http {
                provider: "model",
                source: e,
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(PipelineError::synthesis(format!(
                "Model API returned {status}: {detail}"
            )));
        }

        let reply: ResponsesReply = response.json().await.map_err(|e| {
            PipelineError::synthesis(format!("Undecodable model response: {e}"))
        })?;

        reply
            .into_text()
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| PipelineError::synthesis("No text returned from model".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_prefers_output_text() {
        let reply: ResponsesReply = serde_json::from_str(
            r#"{"output_text": "direct", "output": [{"content": [{"text": "nested"}]}]}"#,
        )
        .unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("direct"));
    }

    #[test]
    fn reply_falls_back_to_nested_content() {
        let reply: ResponsesReply =
            serde_json::from_str(r#"{"output": [{"content": [{"text": "nested"}]}]}"#).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("nested"));
    }

    #[test]
    fn reply_without_text_is_none() {
        let reply: ResponsesReply = serde_json::from_str(r#"{"output": []}"#).unwrap();
        assert_eq!(reply.into_text(), None);
    }
}
