//! Core library for the Pressroom publication pipeline.
//!
//! Pressroom turns monthly content plans into published MDX articles
//! exactly once per scheduled date. The crate provides the plan store,
//! image request planning and provider fallback chain, generative-model
//! glue, front-matter composition, and the publication driver that ties
//! them together.
//!
//! # Pipeline overview
//!
//! ```text
//! ┌───────────┐   ┌────────────┐   ┌───────────────┐   ┌──────────┐
//! │ PlanStore │──▶│ image      │──▶│ Article       │──▶│ compose  │
//! │ (monthly  │   │ planner +  │   │ Synthesizer   │   │ + write  │
//! │  JSON)    │   │ resolver   │   │ (model call)  │   │ + plan   │
//! └───────────┘   └────────────┘   └───────────────┘   │ writeback│
//!                                                      └──────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pressroom_core::{PipelineConfig, PublisherBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let publisher = PublisherBuilder::new()
//!     .with_root(Some("/path/to/blog"))
//!     .with_config(PipelineConfig::from_env())
//!     .build()?;
//!
//! let today = jiff::Timestamp::now()
//!     .to_zoned(jiff::tz::TimeZone::UTC)
//!     .date();
//! let outcome = publisher.publish_for_date(today).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

pub mod compose;
pub mod config;
pub mod error;
pub mod images;
pub mod models;
pub mod publisher;
pub mod store;
pub mod synth;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use images::{plan_image_requests, ImageResolver};
pub use models::{
    month_key, ArticleStatus, Category, ImagePlacement, ImagePurpose, ImageRequest, ImageResult,
    MonthlyPlan, Orientation, PlannedArticle, ResolvedImage,
};
pub use publisher::{
    HeroRefreshSummary, PlanGenerated, PublishOutcome, Publisher, PublisherBuilder,
};
pub use store::PlanStore;
pub use synth::ArticleSynthesizer;
