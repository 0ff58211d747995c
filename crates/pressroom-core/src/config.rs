//! Pipeline configuration, read from the environment exactly once.
//!
//! Credentials are optional except the model key, which is validated by the
//! driver before any remote call: image providers degrade through the
//! fallback chain when unconfigured, the model call cannot.

use crate::error::{PipelineError, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PEXELS_BASE_URL: &str = "https://api.pexels.com";

/// Default model and token budget for article synthesis.
pub const DEFAULT_MODEL: &str = "gpt-4.1-mini";
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4000;

/// Explicit configuration for every remote collaborator.
///
/// Constructed once at process start (normally via [`PipelineConfig::from_env`])
/// and injected into the image resolver and article synthesizer, so the
/// fallback-chain logic stays unit-testable without environment mutation.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model-provider API key (`OPENAI_API_KEY`); required for synthesis
    pub openai_api_key: Option<String>,

    /// Primary image-provider access key (`UNSPLASH_ACCESS_KEY`)
    pub unsplash_access_key: Option<String>,

    /// Secondary image-provider API key (`PEXELS_API_KEY`)
    pub pexels_api_key: Option<String>,

    /// Model-provider endpoint root, overridable for tests
    pub openai_base_url: String,

    /// Primary image-provider endpoint root, overridable for tests
    pub unsplash_base_url: String,

    /// Secondary image-provider endpoint root, overridable for tests
    pub pexels_base_url: String,

    /// Model identifier sent with synthesis requests
    pub model: String,

    /// Token budget for article synthesis
    pub max_output_tokens: u32,
}

impl PipelineConfig {
    /// Reads configuration from the process environment.
    ///
    /// Empty or whitespace-only values count as unset. Base URLs honor
    /// `OPENAI_BASE_URL`, `UNSPLASH_BASE_URL`, and `PEXELS_BASE_URL`.
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env_nonempty("OPENAI_API_KEY"),
            unsplash_access_key: env_nonempty("UNSPLASH_ACCESS_KEY"),
            pexels_api_key: env_nonempty("PEXELS_API_KEY"),
            openai_base_url: env_nonempty("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            unsplash_base_url: env_nonempty("UNSPLASH_BASE_URL")
                .unwrap_or_else(|| DEFAULT_UNSPLASH_BASE_URL.to_string()),
            pexels_base_url: env_nonempty("PEXELS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_PEXELS_BASE_URL.to_string()),
            model: env_nonempty("PRESSROOM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// A configuration with no credentials and default endpoints.
    pub fn unconfigured() -> Self {
        Self {
            openai_api_key: None,
            unsplash_access_key: None,
            pexels_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            unsplash_base_url: DEFAULT_UNSPLASH_BASE_URL.to_string(),
            pexels_base_url: DEFAULT_PEXELS_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }

    /// The model key, or a fatal configuration error when absent.
    pub fn require_model_key(&self) -> Result<&str> {
        self.openai_api_key.as_deref().ok_or_else(|| {
            PipelineError::configuration("Missing OPENAI_API_KEY in environment")
        })
    }

    /// Whether the primary image provider has credentials.
    pub fn primary_image_provider_configured(&self) -> bool {
        self.unsplash_access_key.is_some()
    }

    #[must_use]
    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_unsplash_access_key(mut self, key: impl Into<String>) -> Self {
        self.unsplash_access_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_pexels_api_key(mut self, key: impl Into<String>) -> Self {
        self.pexels_api_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_unsplash_base_url(mut self, url: impl Into<String>) -> Self {
        self.unsplash_base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_pexels_base_url(mut self, url: impl Into<String>) -> Self {
        self.pexels_base_url = url.into();
        self
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_model_key_fails_when_unset() {
        let config = PipelineConfig::unconfigured();
        assert!(config.require_model_key().is_err());
    }

    #[test]
    fn builder_style_overrides_apply() {
        let config = PipelineConfig::unconfigured()
            .with_openai_api_key("k")
            .with_unsplash_base_url("http://localhost:9");
        assert_eq!(config.require_model_key().unwrap(), "k");
        assert_eq!(config.unsplash_base_url, "http://localhost:9");
        assert!(!config.primary_image_provider_configured());
    }
}
