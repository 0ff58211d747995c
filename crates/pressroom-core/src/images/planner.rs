//! Image request planner: derives an ordered, capped list of image lookups
//! from a planned article's metadata.
//!
//! Pure and deterministic. Classification is table-driven: each rule pairs
//! a purpose with the outline keywords that trigger it, so the heuristics
//! stay testable data instead of nested conditionals.

use crate::models::{
    Category, ImagePlacement, ImagePurpose, ImageRequest, Orientation, PlannedArticle,
};

/// Hard cap on requests per article, applied after concatenation. The hero
/// is emitted first and therefore always survives; outline- and code-driven
/// requests past the cap are dropped in source order.
pub const MAX_IMAGE_REQUESTS: usize = 4;

/// Technology topic → focused stock-photo query. Scanned in order against
/// the lowercased title and tags; first match wins.
const TOPIC_QUERIES: &[(&str, &str)] = &[
    ("react", "react javascript code"),
    ("next.js", "web development code"),
    ("nextjs", "web development code"),
    ("node.js", "nodejs server code"),
    ("nodejs", "nodejs server code"),
    ("typescript", "typescript code programming"),
    ("javascript", "javascript code programming"),
    ("ai", "artificial intelligence technology"),
    ("claude", "artificial intelligence robot"),
    ("machine learning", "machine learning data"),
    ("testing", "software testing quality"),
    ("api", "api programming code"),
    ("database", "database technology"),
    ("redis", "database server technology"),
    ("docker", "containers cloud technology"),
    ("kubernetes", "cloud infrastructure"),
    ("microservices", "cloud architecture"),
    ("monolith", "software architecture"),
    ("performance", "performance optimization"),
    ("security", "cybersecurity technology"),
    ("debugging", "debugging code programming"),
    ("memory", "computer memory technology"),
    ("astro", "web development code"),
    ("front-end", "frontend development ui"),
    ("backend", "backend server code"),
];

const DEFAULT_HERO_QUERY: &str = "software development code";

/// Outline keyword rule: purpose, trigger substrings, query fallback phrase.
const OUTLINE_RULES: &[(ImagePurpose, &[&str], &str)] = &[
    (
        ImagePurpose::Diagram,
        &["architecture", "structure", "folder", "directory"],
        "architecture diagram",
    ),
    (
        ImagePurpose::Comparison,
        &["vs", "comparison", "before-and-after", "before and after", "differences"],
        "comparison chart",
    ),
    (
        ImagePurpose::FlowDiagram,
        &["workflow", "flow", "process", "pipeline"],
        "workflow diagram",
    ),
];

/// Minimum word length for "significant" section-title words folded into
/// outline-derived queries.
const SIGNIFICANT_WORD_LEN: usize = 3;
const SIGNIFICANT_WORD_COUNT: usize = 2;

/// Derives the ordered image requests for an article.
///
/// Always exactly one hero request first; then one request per outline
/// keyword match (an entry can match several rules and emit several
/// requests); then a code-editor screenshot when the plan carries more than
/// two code ideas; truncated to [`MAX_IMAGE_REQUESTS`].
pub fn plan_image_requests(article: &PlannedArticle) -> Vec<ImageRequest> {
    let mut requests = vec![hero_request(article)];

    let last_section = article.outline.len().saturating_sub(1);
    for (index, section) in article.outline.iter().enumerate() {
        let lower = section.to_lowercase();
        for (purpose, keywords, fallback) in OUTLINE_RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                let placement = if index == last_section && article.outline.len() > 1 {
                    ImagePlacement::BeforeConclusion
                } else {
                    ImagePlacement::AfterSection(index)
                };
                requests.push(ImageRequest {
                    query: section_query(article.primary_tag(), section, fallback),
                    purpose: *purpose,
                    orientation: Orientation::Landscape,
                    placement,
                    section: Some(section.clone()),
                    alt: alt_text(*purpose, Some(section), &article.title, &article.tags),
                });
            }
        }
    }

    if article.code_ideas.len() > 2 {
        requests.push(ImageRequest {
            query: "code editor programming".to_string(),
            purpose: ImagePurpose::Screenshot,
            orientation: Orientation::Landscape,
            placement: ImagePlacement::MidArticle,
            section: None,
            alt: alt_text(ImagePurpose::Screenshot, None, &article.title, &article.tags),
        });
    }

    requests.truncate(MAX_IMAGE_REQUESTS);
    requests
}

fn hero_request(article: &PlannedArticle) -> ImageRequest {
    ImageRequest {
        query: hero_query(&article.title, Some(article.category), &article.tags),
        purpose: ImagePurpose::Hero,
        orientation: Orientation::Landscape,
        placement: ImagePlacement::Frontmatter,
        section: None,
        alt: alt_text(ImagePurpose::Hero, None, &article.title, &article.tags),
    }
}

/// Derives the hero search query for a title/category/tags triple.
///
/// Priority: specific tech topic in title or tags, then the primary tag's
/// table entry, then a category fallback, then a generic default.
pub fn hero_query(title: &str, category: Option<Category>, tags: &[String]) -> String {
    let lower_title = title.to_lowercase();

    for (topic, query) in TOPIC_QUERIES {
        if lower_title.contains(topic) || tags.iter().any(|t| t.to_lowercase().contains(topic)) {
            return (*query).to_string();
        }
    }

    if let Some(primary) = tags.first() {
        let primary = primary.to_lowercase();
        if let Some((_, query)) = TOPIC_QUERIES.iter().find(|(topic, _)| *topic == primary) {
            return (*query).to_string();
        }
    }

    let category_query = match category {
        Some(Category::Trending) => "technology innovation",
        Some(Category::Tutorial) => "coding programming laptop",
        Some(Category::DeepDive) => "technology abstract",
        None => DEFAULT_HERO_QUERY,
    };
    category_query.to_string()
}

/// Combines the primary tag, the first two significant words of the section
/// title, and the rule's fallback phrase into one search string.
fn section_query(primary_tag: Option<&str>, section: &str, fallback: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(tag) = primary_tag {
        parts.push(tag.to_lowercase());
    }
    parts.extend(
        section
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| w.len() > SIGNIFICANT_WORD_LEN)
            .take(SIGNIFICANT_WORD_COUNT),
    );
    parts.push(fallback.to_string());
    parts.join(" ")
}

/// Contextual alt text per purpose.
pub fn alt_text(
    purpose: ImagePurpose,
    section: Option<&str>,
    title: &str,
    tags: &[String],
) -> String {
    let primary_topic = tags.first().map_or("development", String::as_str);

    match (purpose, section) {
        (ImagePurpose::Hero, _) => format!("Hero image for article about {title}"),
        (ImagePurpose::Diagram, Some(s)) => format!("Diagram illustrating {s}"),
        (ImagePurpose::Diagram, None) => format!("Architecture diagram for {primary_topic}"),
        (ImagePurpose::Comparison, Some(s)) => format!("Visual comparison for {s}"),
        (ImagePurpose::Comparison, None) => format!("Comparison illustration for {primary_topic}"),
        (ImagePurpose::FlowDiagram, Some(s)) => format!("Workflow diagram showing {s}"),
        (ImagePurpose::FlowDiagram, None) => format!("Process flow for {primary_topic}"),
        (ImagePurpose::Screenshot, _) => format!("Code editor showing {primary_topic} example"),
    }
}
