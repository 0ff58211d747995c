//! Primary stock-photo provider client (Unsplash).

use log::warn;
use reqwest::Client;
use serde::Deserialize;

use crate::models::{ImageResult, Orientation};

/// Wire format of the random-photo endpoint, trimmed to the fields we use.
#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: PhotoUrls,
    alt_description: Option<String>,
    description: Option<String>,
    user: PhotoUser,
    links: PhotoLinks,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    regular: String,
}

#[derive(Debug, Deserialize)]
struct PhotoUser {
    name: String,
    links: UserLinks,
}

#[derive(Debug, Deserialize)]
struct UserLinks {
    html: String,
}

#[derive(Debug, Deserialize)]
struct PhotoLinks {
    html: String,
    download_location: Option<String>,
}

pub(super) struct UnsplashProvider<'a> {
    client: &'a Client,
    base_url: &'a str,
    access_key: &'a str,
}

impl<'a> UnsplashProvider<'a> {
    pub(super) fn new(client: &'a Client, base_url: &'a str, access_key: &'a str) -> Self {
        Self {
            client,
            base_url,
            access_key,
        }
    }

    /// Fetches a random photo for the query.
    ///
    /// Every failure mode (network, non-success status, undecodable body)
    /// is logged and collapsed to `None` so the caller falls through the
    /// provider chain.
    pub(super) async fn fetch(&self, query: &str, orientation: Orientation) -> Option<ImageResult> {
        let url = format!("{}/photos/random", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", query),
                ("orientation", orientation.as_str()),
                ("content_filter", "high"),
                ("client_id", self.access_key),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                warn!("Failed to reach Unsplash: {e}");
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("Unsplash API error: {}", response.status());
            return None;
        }
        let photo: RandomPhoto = match response.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("Unexpected Unsplash response body: {e}");
                return None;
            }
        };

        // Unsplash API terms require a download-tracking ping per use.
        if let Some(location) = &photo.links.download_location {
            self.track_download(location).await;
        }

        Some(ImageResult {
            url: photo.urls.regular,
            alt: photo
                .alt_description
                .or(photo.description)
                .unwrap_or_else(|| query.to_string()),
            author: Some(photo.user.name),
            author_url: Some(photo.user.links.html),
            unsplash_url: Some(photo.links.html),
            download_location: photo.links.download_location,
        })
    }

    /// Fire-and-forget compliance ping. The outcome is deliberately
    /// discarded: a failed ping must never affect the image result.
    async fn track_download(&self, download_location: &str) {
        let result = self
            .client
            .get(download_location)
            .header("Authorization", format!("Client-ID {}", self.access_key))
            .send()
            .await;
        if let Err(e) = result {
            warn!("Failed to trigger Unsplash download tracking: {e}");
        }
    }
}
