//! Command handlers bridging parsed arguments and the core publisher.
//!
//! Handlers own all operator-facing output: core operations return typed
//! outcomes, and this layer prints their status lines. Exit codes follow
//! the pipeline contract: informational outcomes (nothing to do, already
//! generated) are success; configuration and synthesis failures propagate
//! as errors and exit non-zero.

use anyhow::{Context, Result};
use jiff::civil::Date;
use jiff::tz::TimeZone;
use pressroom_core::{month_key, Publisher};

pub struct Cli {
    publisher: Publisher,
}

impl Cli {
    pub fn new(publisher: Publisher) -> Self {
        Self { publisher }
    }

    /// Runs the publication driver for the given date, defaulting to today
    /// in UTC (schedulers run in UTC; using UTC keeps reruns consistent).
    pub async fn publish(&self, date: Option<Date>) -> Result<()> {
        let date = date.unwrap_or_else(today_utc);
        println!("📝 Generating article for {date} (month: {})", month_key(date));

        let outcome = self
            .publisher
            .publish_for_date(date)
            .await
            .context("Failed to publish planned article")?;
        println!("{outcome}");
        Ok(())
    }

    /// Generates the content plan for the current month.
    pub async fn generate_plan(&self) -> Result<()> {
        let today = today_utc();
        let generated = self
            .publisher
            .generate_plan(today)
            .await
            .context("Failed to generate content plan")?;
        println!("{generated}");
        Ok(())
    }

    /// Refreshes hero images across all persisted articles.
    pub async fn refresh_heroes(&self) -> Result<()> {
        println!("🖼️  Updating hero images for all articles");
        let summary = self
            .publisher
            .refresh_hero_images()
            .await
            .context("Failed to refresh hero images")?;
        println!("{summary}");
        Ok(())
    }
}

/// Today's calendar date in UTC.
fn today_utc() -> Date {
    jiff::Timestamp::now().to_zoned(TimeZone::UTC).date()
}
