//! Secondary stock-photo provider client (Pexels).

use log::warn;
use reqwest::Client;
use serde::Deserialize;

use crate::models::{ImageResult, Orientation};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    src: PhotoSrc,
    photographer: String,
    photographer_url: String,
}

#[derive(Debug, Deserialize)]
struct PhotoSrc {
    large: String,
}

pub(super) struct PexelsProvider<'a> {
    client: &'a Client,
    base_url: &'a str,
    api_key: &'a str,
}

impl<'a> PexelsProvider<'a> {
    pub(super) fn new(client: &'a Client, base_url: &'a str, api_key: &'a str) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Searches for one photo matching the query; `None` on any failure or
    /// an empty result set.
    pub(super) async fn fetch(&self, query: &str, orientation: Orientation) -> Option<ImageResult> {
        let url = format!("{}/v1/search", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("per_page", "1"),
                ("orientation", orientation.as_str()),
            ])
            .header("Authorization", self.api_key)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to reach Pexels: {e}");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("Pexels API error: {}", response.status());
            return None;
        }
        let body: SearchResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Unexpected Pexels response body: {e}");
                return None;
            }
        };

        let photo = body.photos.into_iter().next()?;
        Some(ImageResult {
            url: photo.src.large,
            alt: query.to_string(),
            author: Some(photo.photographer),
            author_url: Some(photo.photographer_url),
            unsplash_url: None,
            download_location: None,
        })
    }
}
