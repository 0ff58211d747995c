//! Hero-image refresh for already-persisted articles.
//!
//! Walks the articles directory, rebuilds each article's hero query from
//! its front-matter, resolves a fresh image, and rewrites the hero fields
//! in place. Requires the primary image provider; refreshing heroes with
//! placeholders only would be a downgrade.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use log::{info, warn};

use super::{Publisher, ARTICLE_EXT};
use crate::compose;
use crate::error::{IoResultExt, PipelineError, Result};
use crate::images::{alt_text, hero_query};
use crate::models::{Category, ImagePurpose, Orientation};

/// Spacing between per-article lookups; slightly over the provider's
/// one-request-per-second guidance.
const INTER_ARTICLE_DELAY: Duration = Duration::from_millis(1100);

/// Tally of a hero-refresh run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeroRefreshSummary {
    pub updated: usize,
    pub failed: usize,
}

impl fmt::Display for HeroRefreshSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📊 Summary: {} updated, {} failed", self.updated, self.failed)
    }
}

impl Publisher {
    /// Refreshes the hero image of every persisted article.
    ///
    /// Articles whose front-matter cannot be parsed are counted as failed
    /// and skipped; the run continues.
    pub async fn refresh_hero_images(&self) -> Result<HeroRefreshSummary> {
        if !self.config.primary_image_provider_configured() {
            return Err(PipelineError::configuration(
                "Missing UNSPLASH_ACCESS_KEY in environment",
            ));
        }

        let mut paths: Vec<_> = std::fs::read_dir(&self.articles_dir)
            .fs_context(&self.articles_dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == ARTICLE_EXT))
            .collect();
        paths.sort();

        info!("Found {} articles", paths.len());

        let mut summary = HeroRefreshSummary::default();
        for (i, path) in paths.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(INTER_ARTICLE_DELAY).await;
            }
            if self.refresh_one(path).await? {
                summary.updated += 1;
            } else {
                summary.failed += 1;
            }
        }

        Ok(summary)
    }

    /// Refreshes a single article; `Ok(false)` means skipped, not fatal.
    async fn refresh_one(&self, path: &Path) -> Result<bool> {
        let content = std::fs::read_to_string(path).fs_context(path)?;
        let Some(parsed) = compose::parse_front_matter(&content) else {
            warn!("Could not parse front-matter of {}", path.display());
            return Ok(false);
        };
        let Some(title) = parsed.title.as_deref() else {
            warn!("No title in front-matter of {}", path.display());
            return Ok(false);
        };

        let category = parsed
            .category
            .as_deref()
            .and_then(|c| Category::from_str(c).ok());
        let query = hero_query(title, category, &parsed.tags);
        info!("📄 {} 🔍 query: \"{query}\"", path.display());

        let image = self.resolver.resolve(&query, Orientation::Landscape).await;
        let alt = alt_text(ImagePurpose::Hero, None, title, &parsed.tags);

        let mut front = parsed.front_matter.clone();
        front = compose::upsert_front_matter_field(&front, "heroImage", &image.url);
        front = compose::upsert_front_matter_field(&front, "heroImageAlt", &alt);
        if let Some(author) = &image.author {
            front = compose::upsert_front_matter_field(&front, "heroImageAuthor", author);
        }
        if let Some(author_url) = &image.author_url {
            front = compose::upsert_front_matter_field(&front, "heroImageAuthorUrl", author_url);
        }

        std::fs::write(path, compose::render_document(&front, &parsed.body)).fs_context(path)?;
        Ok(true)
    }
}
