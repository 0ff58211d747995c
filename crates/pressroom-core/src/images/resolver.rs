//! Image resolver: an ordered fallback chain over the configured providers.

use log::{debug, info};
use reqwest::Client;

use super::pexels::PexelsProvider;
use super::placeholder;
use super::unsplash::UnsplashProvider;
use crate::config::PipelineConfig;
use crate::models::{ImageResult, Orientation};

/// Resolves a search query to exactly one image descriptor.
///
/// The chain is Unsplash → Pexels → deterministic placeholder; each step is
/// attempted only when the prior yields nothing, and the placeholder cannot
/// fail, so [`ImageResolver::resolve`] never does either.
pub struct ImageResolver {
    client: Client,
    config: PipelineConfig,
}

impl ImageResolver {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    /// Whether the primary provider has credentials. Callers iterating
    /// several requests use this to decide on inter-call rate-limit delays.
    pub fn primary_configured(&self) -> bool {
        self.config.primary_image_provider_configured()
    }

    /// Resolves a query through the fallback chain. Always returns a result.
    pub async fn resolve(&self, query: &str, orientation: Orientation) -> ImageResult {
        if let Some(key) = &self.config.unsplash_access_key {
            let provider = UnsplashProvider::new(&self.client, &self.config.unsplash_base_url, key);
            if let Some(image) = provider.fetch(query, orientation).await {
                debug!("Resolved '{query}' via Unsplash");
                return image;
            }
        } else {
            info!("UNSPLASH_ACCESS_KEY not configured, using fallback");
        }

        if let Some(key) = &self.config.pexels_api_key {
            let provider = PexelsProvider::new(&self.client, &self.config.pexels_base_url, key);
            if let Some(image) = provider.fetch(query, orientation).await {
                debug!("Resolved '{query}' via Pexels");
                return image;
            }
        }

        debug!("Resolved '{query}' via placeholder");
        placeholder::placeholder_image(query, orientation)
    }
}
