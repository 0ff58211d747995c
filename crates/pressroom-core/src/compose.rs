//! Front-matter composition, body image splicing, and the minimal
//! front-matter parsing needed to update already-persisted articles.
//!
//! Front-matter here is deliberately not full YAML: values are quoted
//! strings escaped only for embedded double quotes. Titles containing
//! newlines or other YAML-significant syntax are an unhandled edge case.

use crate::models::{ImagePlacement, PlannedArticle, ResolvedImage};
use crate::synth::prompt::SIGNATURE_FIRST_LINE;

/// Tags written when a plan entry has none.
const FALLBACK_TAGS: [&str; 2] = ["dev", "blog"];

/// Headings treated as the conclusion for `before-conclusion` placement.
const CONCLUSION_MARKERS: [&str; 4] = ["conclusion", "wrapping up", "wrap-up", "final thoughts"];

/// Escapes a front-matter string value: embedded `"` only.
pub fn escape_front_matter(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// Assembles the final persisted document: front-matter block, blank line,
/// spliced body, single trailing newline.
pub fn compose_document(
    article: &PlannedArticle,
    hero: &ResolvedImage,
    body: &str,
    in_article: &[ResolvedImage],
) -> String {
    let front = front_matter_block(article, hero);
    let body = splice_images(body, in_article);
    format!("---\n{front}\n---\n\n{}\n", body.trim_end())
}

/// Builds the key-ordered front-matter block (without delimiters).
///
/// Attribution fields are emitted only when the provider supplied them.
fn front_matter_block(article: &PlannedArticle, hero: &ResolvedImage) -> String {
    let mut lines = vec![
        format!("title: \"{}\"", escape_front_matter(&article.title)),
        format!("description: \"{}\"", escape_front_matter(&article.description)),
        format!("category: \"{}\"", article.category.as_str()),
        format!("publishDate: \"{}\"", article.date),
        "tags:".to_string(),
    ];
    if article.tags.is_empty() {
        lines.extend(FALLBACK_TAGS.iter().map(|t| format!("  - {t}")));
    } else {
        lines.extend(article.tags.iter().map(|t| format!("  - {t}")));
    }
    lines.push(format!("slug: \"{}\"", escape_front_matter(&article.slug)));

    lines.push(format!("heroImage: \"{}\"", escape_front_matter(hero.url())));
    lines.push(format!("heroImageAlt: \"{}\"", escape_front_matter(hero.alt())));
    if let Some(author) = hero.author() {
        lines.push(format!("heroImageAuthor: \"{}\"", escape_front_matter(author)));
    }
    if let Some(author_url) = hero.author_url() {
        lines.push(format!("heroImageAuthorUrl: \"{}\"", escape_front_matter(author_url)));
    }
    if let Some(page) = &hero.image.unsplash_url {
        lines.push(format!("heroImageUnsplashUrl: \"{}\"", escape_front_matter(page)));
    }
    if let Some(location) = &hero.image.download_location {
        lines.push(format!(
            "heroImageDownloadLocation: \"{}\"",
            escape_front_matter(location)
        ));
    }

    lines.join("\n")
}

/// Splices in-article images into the body, one at a time in order.
pub fn splice_images(body: &str, images: &[ResolvedImage]) -> String {
    let mut text = body.to_string();
    for image in images {
        text = insert_image(&text, image);
    }
    text
}

fn insert_image(body: &str, image: &ResolvedImage) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let at = insertion_index(&lines, image);

    let mut out: Vec<String> = lines[..at].iter().map(|l| (*l).to_string()).collect();
    out.push(String::new());
    out.push(format!("![{}]({})", image.alt(), image.url()));
    if let Some(attribution) = attribution_line(image) {
        out.push(attribution);
    }
    out.push(String::new());
    out.extend(lines[at..].iter().map(|l| (*l).to_string()));
    out.join("\n")
}

/// Italic attribution for images with a known author.
fn attribution_line(image: &ResolvedImage) -> Option<String> {
    let author = image.author()?;
    Some(match (image.author_url(), image.image.unsplash_url.as_deref()) {
        (Some(author_url), Some(page)) => {
            format!("*Photo by [{author}]({author_url}) on [Unsplash]({page})*")
        }
        (Some(author_url), None) => format!("*Photo by [{author}]({author_url})*"),
        (None, _) => format!("*Photo by {author}*"),
    })
}

/// Picks the line index an image block is inserted before.
///
/// Strategy order: matching section heading, placement heuristics, the
/// closing signature, end of document. The signature fallback means an
/// image never silently disappears; worst case it lands at the bottom.
fn insertion_index(lines: &[&str], image: &ResolvedImage) -> usize {
    if let Some(section) = &image.request.section {
        let needle = section.to_lowercase();
        if let Some(i) = lines
            .iter()
            .position(|l| l.starts_with("##") && l.to_lowercase().contains(&needle))
        {
            return end_of_first_paragraph(lines, i);
        }
    }

    let headings: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.starts_with("## "))
        .map(|(i, _)| i)
        .collect();

    match image.request.placement {
        ImagePlacement::MidArticle if !headings.is_empty() => {
            return end_of_first_paragraph(lines, headings[headings.len() / 2]);
        }
        ImagePlacement::BeforeConclusion => {
            let conclusion = headings.iter().rev().find(|&&i| {
                let lower = lines[i].to_lowercase();
                CONCLUSION_MARKERS.iter().any(|m| lower.contains(m))
            });
            if let Some(&i) = conclusion {
                return i;
            }
        }
        ImagePlacement::AfterSection(n) => {
            if let Some(&i) = headings.get(n) {
                return end_of_first_paragraph(lines, i);
            }
        }
        _ => {}
    }

    lines
        .iter()
        .position(|l| l.starts_with(SIGNATURE_FIRST_LINE) || l.starts_with("Until next time"))
        .unwrap_or(lines.len())
}

/// Index just past the first blank-line-terminated paragraph following a
/// heading line.
fn end_of_first_paragraph(lines: &[&str], heading: usize) -> usize {
    let mut i = heading + 1;
    while i < lines.len() && lines[i].trim().is_empty() {
        i += 1;
    }
    while i < lines.len() && !lines[i].trim().is_empty() {
        i += 1;
    }
    i
}

/// A parsed front-matter block and the fields hero refresh needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrontMatter {
    /// Inner block text, without the `---` delimiters
    pub front_matter: String,
    /// Everything after the closing delimiter, leading newline included
    pub body: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
}

/// Parses a persisted article's front-matter block.
///
/// Returns `None` when the document does not open with a front-matter
/// block. Only the fields the pipeline rewrites are extracted.
pub fn parse_front_matter(content: &str) -> Option<ParsedFrontMatter> {
    let rest = content.strip_prefix("---\n")?;
    let end = rest.find("\n---")?;
    let front_matter = &rest[..end];
    let body = &rest[end + "\n---".len()..];

    let mut title = None;
    let mut category = None;
    let mut tags = Vec::new();
    let mut in_tags = false;
    for line in front_matter.lines() {
        if let Some(value) = line.strip_prefix("title: ") {
            title = Some(unquote(value));
            in_tags = false;
        } else if let Some(value) = line.strip_prefix("category: ") {
            category = Some(unquote(value));
            in_tags = false;
        } else if line.trim_end() == "tags:" {
            in_tags = true;
        } else if in_tags {
            if let Some(value) = line.trim_start().strip_prefix("- ") {
                tags.push(value.trim().to_string());
            } else {
                in_tags = false;
            }
        }
    }

    Some(ParsedFrontMatter {
        front_matter: front_matter.to_string(),
        body: body.to_string(),
        title,
        category,
        tags,
    })
}

/// Replaces a front-matter field's line, or appends it when absent.
pub fn upsert_front_matter_field(front_matter: &str, field: &str, value: &str) -> String {
    let rendered = format!("{field}: \"{}\"", escape_front_matter(value));
    let prefix = format!("{field}:");
    let mut replaced = false;
    let mut lines: Vec<String> = front_matter
        .lines()
        .map(|line| {
            if !replaced && line.starts_with(&prefix) {
                replaced = true;
                rendered.clone()
            } else {
                line.to_string()
            }
        })
        .collect();
    if !replaced {
        lines.push(rendered);
    }
    lines.join("\n")
}

/// Reassembles a document from an updated front-matter block and a body.
pub fn render_document(front_matter: &str, body: &str) -> String {
    format!("---\n{front_matter}\n---{body}")
}

fn unquote(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.replace("\\\"", "\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ArticleStatus, Category, ImagePurpose, ImageRequest, ImageResult, Orientation,
    };

    fn sample_article() -> PlannedArticle {
        PlannedArticle {
            date: "2025-06-03".parse().unwrap(),
            category: Category::Tutorial,
            slug: "react-hooks".to_string(),
            title: "React Hooks \"Deep\" Dive".to_string(),
            description: "All about hooks".to_string(),
            tags: vec!["react".to_string(), "hooks".to_string()],
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

    fn hero() -> ResolvedImage {
        ResolvedImage {
            request: ImageRequest {
                query: "react javascript code".to_string(),
                purpose: ImagePurpose::Hero,
                orientation: Orientation::Landscape,
                placement: ImagePlacement::Frontmatter,
                section: None,
                alt: "Hero image".to_string(),
            },
            image: ImageResult {
                url: "https://images.example/hero.jpg".to_string(),
                alt: "provider alt".to_string(),
                author: Some("Ada".to_string()),
                author_url: Some("https://example/ada".to_string()),
                unsplash_url: Some("https://unsplash.example/photo".to_string()),
                download_location: None,
            },
        }
    }

    fn in_article(section: Option<&str>, placement: ImagePlacement) -> ResolvedImage {
        ResolvedImage {
            request: ImageRequest {
                query: "q".to_string(),
                purpose: ImagePurpose::Diagram,
                orientation: Orientation::Landscape,
                placement,
                section: section.map(str::to_string),
                alt: "Diagram alt".to_string(),
            },
            image: ImageResult {
                url: "https://images.example/diagram.jpg".to_string(),
                alt: "ignored".to_string(),
                author: None,
                author_url: None,
                unsplash_url: None,
                download_location: None,
            },
        }
    }

    const BODY: &str = "Intro paragraph.\n\n## Folder structure\n\nFirst paragraph of the section\nstill the same paragraph.\n\nSecond paragraph.\n\n## Conclusion\n\nAll done.\n\nUntil next time, happy coding 👨‍💻  \n– Pat 💜";

    #[test]
    fn front_matter_escapes_embedded_quotes() {
        let doc = compose_document(&sample_article(), &hero(), BODY, &[]);
        assert!(doc.contains(r#"title: "React Hooks \"Deep\" Dive""#));
        assert!(!doc.contains("title: \"React Hooks \"Deep\""));
    }

    #[test]
    fn front_matter_keys_are_ordered_and_conditional() {
        let doc = compose_document(&sample_article(), &hero(), BODY, &[]);
        let title = doc.find("title:").unwrap();
        let description = doc.find("description:").unwrap();
        let category = doc.find("category:").unwrap();
        let publish = doc.find("publishDate:").unwrap();
        let tags = doc.find("tags:").unwrap();
        let slug = doc.find("slug:").unwrap();
        let hero_key = doc.find("heroImage:").unwrap();
        assert!(title < description && description < category);
        assert!(category < publish && publish < tags && tags < slug && slug < hero_key);
        assert!(doc.contains("heroImageUnsplashUrl:"));
        // No download location on the result, so the key is absent.
        assert!(!doc.contains("heroImageDownloadLocation:"));
    }

    #[test]
    fn empty_tags_fall_back_to_default_pair() {
        let mut article = sample_article();
        article.tags = Vec::new();
        let doc = compose_document(&article, &hero(), BODY, &[]);
        assert!(doc.contains("tags:\n  - dev\n  - blog\n"));
    }

    #[test]
    fn document_ends_with_single_trailing_newline() {
        let doc = compose_document(&sample_article(), &hero(), BODY, &[]);
        assert!(doc.ends_with("💜\n"));
        assert!(!doc.ends_with("\n\n"));
    }

    #[test]
    fn image_splices_after_matching_section_paragraph() {
        let spliced = splice_images(
            BODY,
            &[in_article(Some("Folder structure"), ImagePlacement::AfterSection(0))],
        );
        let section = spliced.find("## Folder structure").unwrap();
        let image = spliced.find("![Diagram alt]").unwrap();
        let second = spliced.find("Second paragraph.").unwrap();
        assert!(section < image && image < second);
    }

    #[test]
    fn before_conclusion_inserts_above_conclusion_heading() {
        let spliced = splice_images(BODY, &[in_article(None, ImagePlacement::BeforeConclusion)]);
        let image = spliced.find("![Diagram alt]").unwrap();
        let conclusion = spliced.find("## Conclusion").unwrap();
        assert!(image < conclusion);
    }

    #[test]
    fn unanchored_image_lands_before_signature() {
        // No matching section and no headings at all: last-resort fallback.
        let body = "Just one paragraph.\n\nUntil next time, happy coding 👨‍💻  \n– Pat 💜";
        let spliced = splice_images(
            body,
            &[in_article(Some("Nonexistent section"), ImagePlacement::AfterSection(7))],
        );
        let image = spliced.find("![Diagram alt]").unwrap();
        let signature = spliced.find("Until next time").unwrap();
        assert!(image < signature);
    }

    #[test]
    fn attribution_rendered_only_with_known_author() {
        let mut with_author = in_article(None, ImagePlacement::BeforeConclusion);
        with_author.image.author = Some("Grace".to_string());
        with_author.image.author_url = Some("https://example/grace".to_string());
        let spliced = splice_images(BODY, &[with_author]);
        assert!(spliced.contains("*Photo by [Grace](https://example/grace)*"));

        let anonymous = splice_images(BODY, &[in_article(None, ImagePlacement::BeforeConclusion)]);
        assert!(!anonymous.contains("*Photo by"));
    }

    #[test]
    fn parse_round_trips_upserted_hero_fields() {
        let doc = compose_document(&sample_article(), &hero(), BODY, &[]);
        let parsed = parse_front_matter(&doc).unwrap();
        assert_eq!(parsed.title.as_deref(), Some("React Hooks \"Deep\" Dive"));
        assert_eq!(parsed.category.as_deref(), Some("tutorial"));
        assert_eq!(parsed.tags, vec!["react", "hooks"]);

        let updated = upsert_front_matter_field(
            &parsed.front_matter,
            "heroImage",
            "https://images.example/new.jpg",
        );
        assert!(updated.contains("heroImage: \"https://images.example/new.jpg\""));
        assert!(!updated.contains("https://images.example/hero.jpg"));

        let rendered = render_document(&updated, &parsed.body);
        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("\n---\n\nIntro paragraph."));
    }

    #[test]
    fn parse_returns_none_without_front_matter() {
        assert!(parse_front_matter("no front matter here").is_none());
    }
}
