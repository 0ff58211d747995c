//! The per-invocation publication state machine.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use jiff::civil::Date;
use log::{info, warn};

use super::{Publisher, ARTICLE_EXT};
use crate::compose;
use crate::error::{IoResultExt, PipelineError, Result};
use crate::images::plan_image_requests;
use crate::models::{month_key, ArticleStatus, MonthlyPlan, PlannedArticle, ResolvedImage};

/// Delay between image lookups when the primary provider is configured,
/// per its rate-limit guidance. No delay when only fallbacks are active.
const INTER_RESOLVE_DELAY: Duration = Duration::from_secs(1);

/// Terminal state of one publication run. Every variant exits the process
/// successfully; fatal conditions surface as errors instead.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    /// No plan file exists for the month; valid before generation begins
    NoPlan { month: String },
    /// The plan has no entry scheduled for the date
    NoEntry { date: Date, month: String },
    /// The target file already exists; generation skipped, plan status
    /// reconciled forward when a matching entry was found
    AlreadyPublished {
        entry_slug: String,
        reconciled: bool,
    },
    /// A new article was generated and persisted
    Published {
        entry_slug: String,
        path: PathBuf,
        image_count: usize,
    },
}

impl fmt::Display for PublishOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishOutcome::NoPlan { month } => write!(
                f,
                "ℹ️ No content plan file found for month {month} in content-plans/. Exiting."
            ),
            PublishOutcome::NoEntry { date, month } => write!(
                f,
                "ℹ️ No article scheduled for {date} in content-plans/{month}.json. Exiting."
            ),
            PublishOutcome::AlreadyPublished {
                entry_slug,
                reconciled,
            } => {
                write!(f, "ℹ️ Article already exists for {entry_slug}. Skipping generation.")?;
                if *reconciled {
                    write!(f, "\n🗂 Marked existing article as published in the content plan.")?;
                }
                Ok(())
            }
            PublishOutcome::Published {
                entry_slug,
                path,
                image_count,
            } => write!(
                f,
                "✅ Article generated at: {} ({image_count} images)\n   Slug: {entry_slug}",
                path.display()
            ),
        }
    }
}

impl Publisher {
    /// Runs the publication state machine for one date.
    ///
    /// States: no plan and no entry are informational exits; an existing
    /// target file reconciles the plan forward and exits; otherwise the run
    /// synthesizes, persists, and reconciles. Any error out of the
    /// generating/persisting steps is fatal for the run; nothing has been
    /// written yet when synthesis fails, so no cleanup is needed.
    pub async fn publish_for_date(&self, date: Date) -> Result<PublishOutcome> {
        // Missing model credentials abort before any remote call.
        self.config.require_model_key()?;

        let month = month_key(date);
        let Some(mut plan) = self.store.load_for_month(&month)? else {
            return Ok(PublishOutcome::NoPlan { month });
        };
        let Some(article) = plan.article_for_date(date).cloned() else {
            return Ok(PublishOutcome::NoEntry { date, month });
        };

        let entry_slug = article.build_entry_slug();
        let path = self.articles_dir.join(format!("{entry_slug}.{ARTICLE_EXT}"));

        // The file on disk, not the plan's status field, is the durable
        // "already generated" signal. Reconciliation still runs so a
        // manually created file gets reflected in the plan.
        if path.exists() {
            let reconciled =
                mark_published(&mut plan, &article, &entry_slug, None, None);
            if reconciled {
                self.store.save_for_month(&month, &plan)?;
            } else {
                warn!("Could not find matching plan entry for {date} to update status");
            }
            return Ok(PublishOutcome::AlreadyPublished {
                entry_slug,
                reconciled,
            });
        }

        info!(
            "Planned article found: [{}] {} -> {}",
            article.category.as_str(),
            article.title,
            path.display()
        );

        let resolved = self.resolve_images(&article).await;
        let hero_index = resolved
            .iter()
            .position(ResolvedImage::is_hero)
            .ok_or_else(|| {
                PipelineError::invalid_input("outline", "image planning produced no hero request")
            })?;
        let hero = resolved[hero_index].clone();
        let in_article: Vec<ResolvedImage> = resolved
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != hero_index)
            .map(|(_, img)| img)
            .collect();

        let hints: Vec<_> = in_article.iter().map(|img| img.request.clone()).collect();
        let body = self
            .synthesizer
            .synthesize_article(&article, &hints, date)
            .await?;

        let document = compose::compose_document(&article, &hero, &body, &in_article);
        std::fs::write(&path, document).fs_context(&path)?;

        let image_count = 1 + in_article.len();
        if !mark_published(
            &mut plan,
            &article,
            &entry_slug,
            Some(hero.url().to_string()),
            Some(image_count),
        ) {
            warn!("Could not find matching plan entry for {date} to update status");
        }
        self.store.save_for_month(&month, &plan)?;

        Ok(PublishOutcome::Published {
            entry_slug,
            path,
            image_count,
        })
    }

    /// Resolves every planned image request sequentially, spacing calls out
    /// when the primary provider's rate limits apply.
    async fn resolve_images(&self, article: &PlannedArticle) -> Vec<ResolvedImage> {
        let requests = plan_image_requests(article);
        let mut resolved = Vec::with_capacity(requests.len());
        for (i, request) in requests.into_iter().enumerate() {
            if i > 0 && self.resolver.primary_configured() {
                tokio::time::sleep(INTER_RESOLVE_DELAY).await;
            }
            info!("🔍 Fetching image: {}", request.query);
            let image = self.resolver.resolve(&request.query, request.orientation).await;
            resolved.push(ResolvedImage { request, image });
        }
        resolved
    }
}

/// Forces the matching plan entry to `published`, recording the entry slug
/// and, when freshly generated, the hero URL and image count.
///
/// Matches by date plus slug-or-entrySlug; first match wins when a date is
/// shared by several entries. Returns whether an entry was updated.
fn mark_published(
    plan: &mut MonthlyPlan,
    article: &PlannedArticle,
    entry_slug: &str,
    hero_image: Option<String>,
    image_count: Option<usize>,
) -> bool {
    let Some(index) = plan.position_of(article.date, &article.slug, entry_slug) else {
        return false;
    };
    let entry = &mut plan.articles[index];
    entry.status = ArticleStatus::Published;
    entry.entry_slug = Some(entry_slug.to_string());
    if hero_image.is_some() {
        entry.hero_image = hero_image;
    }
    if image_count.is_some() {
        entry.image_count = image_count;
    }
    true
}
