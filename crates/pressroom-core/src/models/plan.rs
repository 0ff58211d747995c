//! Monthly plan and planned-article models.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ArticleStatus, Category};

/// One month's content plan, persisted as `content-plans/<YYYY-MM>.json`.
///
/// `articles` keeps insertion order from plan generation and is not
/// guaranteed to be sorted by date. At most one entry should logically own
/// a given date; the store does not enforce this, and date lookups return
/// the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlan {
    /// Canonical month key, `YYYY-MM`
    pub month: String,

    /// First day of the month (informational, not enforced at load time)
    pub start_date: Date,

    /// Last day of the month (informational, not enforced at load time)
    pub end_date: Date,

    /// Planned entries, in generation order
    pub articles: Vec<PlannedArticle>,
}

impl MonthlyPlan {
    /// Returns the first planned entry scheduled for `date`, if any.
    pub fn article_for_date(&self, date: Date) -> Option<&PlannedArticle> {
        self.articles.iter().find(|a| a.date == date)
    }

    /// Locates the entry matching `date` plus slug-or-entrySlug equality.
    ///
    /// The slug disjunction tolerates drift between a plan's base slug and
    /// the slug an already-persisted file was generated under. First match
    /// wins when two entries share a date.
    pub fn position_of(&self, date: Date, slug: &str, entry_slug: &str) -> Option<usize> {
        self.articles.iter().position(|a| {
            a.date == date && (a.slug == slug || a.entry_slug.as_deref() == Some(entry_slug))
        })
    }
}

/// A single planned article inside a [`MonthlyPlan`].
///
/// Unknown fields present in the plan file are captured in `extra` so a
/// load/modify/save cycle never drops data written by other tooling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedArticle {
    /// Publication day, `YYYY-MM-DD`
    pub date: Date,

    /// Editorial category
    pub category: Category,

    /// Base slug, kebab-case, without date prefix
    pub slug: String,

    /// Display title
    pub title: String,

    /// Meta description
    pub description: String,

    /// Ordered tags; the first tag is primary and drives image heuristics
    #[serde(default)]
    pub tags: Vec<String>,

    /// Lifecycle status
    #[serde(default)]
    pub status: ArticleStatus,

    /// What makes this article worth reading (planning hint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<String>,

    /// Ordered section ideas (planning hint)
    #[serde(default)]
    pub outline: Vec<String>,

    /// Concrete code examples to incorporate (planning hint)
    #[serde(default)]
    pub code_ideas: Vec<String>,

    /// Diagram/image/gif ideas (planning hint)
    #[serde(default)]
    pub media_ideas: Vec<String>,

    /// Date-prefixed filename stem; set on first publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_slug: Option<String>,

    /// Hero image URL captured at publication time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,

    /// Number of images resolved at publication time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_count: Option<usize>,

    /// Fields this tool does not model, preserved verbatim across rewrites
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PlannedArticle {
    /// Computes the date-prefixed filename stem for this entry.
    ///
    /// An empty base slug degrades to the bare date, matching how manually
    /// edited plans without slugs are handled.
    pub fn build_entry_slug(&self) -> String {
        if self.slug.is_empty() {
            self.date.to_string()
        } else {
            format!("{}-{}", self.date, self.slug)
        }
    }

    /// The primary tag, when one exists.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Derives the canonical `YYYY-MM` month key from a calendar date.
pub fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(date: &str, slug: &str) -> PlannedArticle {
        PlannedArticle {
            date: date.parse().unwrap(),
            category: Category::Tutorial,
            slug: slug.to_string(),
            title: "Test".to_string(),
            description: "Test description".to_string(),
            tags: vec!["react".to_string()],
            status: ArticleStatus::Planned,
            angle: None,
            outline: Vec::new(),
            code_ideas: Vec::new(),
            media_ideas: Vec::new(),
            entry_slug: None,
            hero_image: None,
            image_count: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn entry_slug_prefixes_date() {
        assert_eq!(
            article("2025-06-03", "react-hooks").build_entry_slug(),
            "2025-06-03-react-hooks"
        );
    }

    #[test]
    fn entry_slug_without_base_slug_is_the_date() {
        assert_eq!(article("2025-06-03", "").build_entry_slug(), "2025-06-03");
    }

    #[test]
    fn month_key_pads_single_digit_months() {
        assert_eq!(month_key("2025-06-03".parse().unwrap()), "2025-06");
        assert_eq!(month_key("2025-11-30".parse().unwrap()), "2025-11");
    }

    #[test]
    fn first_match_wins_for_duplicate_dates() {
        let plan = MonthlyPlan {
            month: "2025-06".to_string(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-30".parse().unwrap(),
            articles: vec![article("2025-06-03", "first"), article("2025-06-03", "second")],
        };
        let found = plan.article_for_date("2025-06-03".parse().unwrap()).unwrap();
        assert_eq!(found.slug, "first");
    }

    #[test]
    fn position_matches_by_entry_slug_after_slug_drift() {
        let mut renamed = article("2025-06-03", "renamed-slug");
        renamed.entry_slug = Some("2025-06-03-react-hooks".to_string());
        let plan = MonthlyPlan {
            month: "2025-06".to_string(),
            start_date: "2025-06-01".parse().unwrap(),
            end_date: "2025-06-30".parse().unwrap(),
            articles: vec![renamed],
        };
        let pos = plan.position_of(
            "2025-06-03".parse().unwrap(),
            "react-hooks",
            "2025-06-03-react-hooks",
        );
        assert_eq!(pos, Some(0));
    }
}
