//! Status and category enumerations for planned articles.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of article lifecycle statuses.
///
/// Entries are created as `Planned` by plan generation and move to
/// `Published` exclusively through the publication driver. The transition
/// is monotonic: the driver never reverts a published entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Scheduled in a monthly plan, nothing written yet
    #[default]
    Planned,

    /// Partially written, not yet published
    Draft,

    /// Generated and persisted to the articles directory
    Published,
}

impl FromStr for ArticleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(ArticleStatus::Planned),
            "draft" => Ok(ArticleStatus::Draft),
            "published" => Ok(ArticleStatus::Published),
            _ => Err(format!("Invalid article status: {s}")),
        }
    }
}

impl ArticleStatus {
    /// Convert to the plan-file string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Planned => "planned",
            ArticleStatus::Draft => "draft",
            ArticleStatus::Published => "published",
        }
    }
}

/// Editorial category of a planned article.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Practical how-to guides with concrete code examples
    Tutorial,

    /// Industry developments, releases, patterns gaining traction
    Trending,

    /// Conceptual or architectural pieces
    DeepDive,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tutorial" => Ok(Category::Tutorial),
            "trending" => Ok(Category::Trending),
            "deep-dive" | "deepdive" => Ok(Category::DeepDive),
            _ => Err(format!("Invalid category: {s}")),
        }
    }
}

impl Category {
    /// Convert to the plan-file string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tutorial => "tutorial",
            Category::Trending => "trending",
            Category::DeepDive => "deep-dive",
        }
    }
}
