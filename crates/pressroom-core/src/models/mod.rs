//! Data models for monthly plans, planned articles, and images.
//!
//! Plan models mirror the JSON schema of the per-month plan files; image
//! models are in-memory only and never persisted.

pub mod image;
pub mod plan;
pub mod status;

pub use image::{
    ImagePlacement, ImagePurpose, ImageRequest, ImageResult, Orientation, ResolvedImage,
};
pub use plan::{month_key, MonthlyPlan, PlannedArticle};
pub use status::{ArticleStatus, Category};
