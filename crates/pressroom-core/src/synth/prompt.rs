//! Prompt assembly for article and plan synthesis.
//!
//! The instruction blocks are fixed strings; the user prompts are assembled
//! from plan metadata. Models are asked for body text only: front-matter is
//! composed locally so its field order and escaping stay deterministic.

use jiff::civil::Date;

use crate::models::{ImagePlacement, ImageRequest, PlannedArticle};

/// First line of the mandatory closing signature. The composer also uses it
/// as the last-resort image insertion anchor.
pub const SIGNATURE_FIRST_LINE: &str = "Until next time, happy coding 👨‍💻";

/// Second line of the mandatory closing signature.
pub const SIGNATURE_SECOND_LINE: &str = "– Pat 💜";

/// Fixed system instruction block for article synthesis.
pub fn article_instructions() -> String {
    [
        "You are writing the body of an MDX article for a personal dev blog.",
        "Voice:",
        "- Friendly, dev-to-dev, slightly informal.",
        "- Technically sharp and honest about trade-offs.",
        "- Focused on practical value, not SEO fluff.",
        "- Explains WHY things matter, not only HOW.",
        "",
        "Accuracy constraints (non-negotiable):",
        "- NEVER invent APIs, package names, or configuration options.",
        "- If you are unsure of exact syntax, write clearly-labeled pseudocode",
        "  instead of guessing.",
        "- When a detail may have changed since your knowledge cutoff, say so",
        "  and tell the reader to check the official docs; do not fabricate.",
        "",
        "The blog uses Astro + MDX. Articles are long-form but readable, with",
        "real code and concrete examples.",
    ]
    .join("\n")
}

/// Assembles the user-turn prompt for one planned article.
///
/// `image_hints` are the in-article (non-hero) requests that will be spliced
/// into the body after synthesis, so the model can shape sections around
/// them instead of inventing its own image placeholders.
pub fn article_prompt(article: &PlannedArticle, image_hints: &[ImageRequest], today: Date) -> String {
    let tags_list = article.tags.join(", ");
    let outline_text = if article.outline.is_empty() {
        "(no outline provided, design a clear structure)".to_string()
    } else {
        article
            .outline
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let code_ideas_text = bullet_list(&article.code_ideas);
    let media_ideas_text = bullet_list(&article.media_ideas);
    let image_hints_text = if image_hints.is_empty() {
        "- (none; do not add image placeholders yourself)".to_string()
    } else {
        image_hints
            .iter()
            .map(|hint| format!("- {}: {}", placement_label(hint), hint.alt))
            .collect::<Vec<_>>()
            .join("\n")
    };

    [
        format!("Today is {today}."),
        String::new(),
        "Write the **complete MDX article body** (no frontmatter) based on this planning info:".to_string(),
        String::new(),
        format!("Title: {}", article.title),
        format!(
            "Category: {}   (one of \"tutorial\" | \"trending\" | \"deep-dive\")",
            article.category.as_str()
        ),
        format!("Slug (base, without date): {}", article.slug),
        format!("Planned publication date: {}", article.date),
        format!("Description (meta): {}", article.description),
        format!("Tags: {tags_list}"),
        String::new(),
        "Value angle (what makes this worth reading):".to_string(),
        article
            .angle
            .clone()
            .unwrap_or_else(|| "(no angle provided, define a strong one yourself)".to_string()),
        String::new(),
        "Outline / section ideas (you can adapt slightly, but follow the spirit):".to_string(),
        outline_text,
        String::new(),
        "Code ideas (snippets you MUST incorporate, adapted as needed):".to_string(),
        code_ideas_text,
        String::new(),
        "Media ideas (context only; images are inserted separately):".to_string(),
        media_ideas_text,
        String::new(),
        "Images that will be spliced into the body after you are done:".to_string(),
        image_hints_text,
        String::new(),
        "Structure requirements:".to_string(),
        "- Start with a short intro that hooks the reader and restates the value in your own words.".to_string(),
        "- Use `##` headings that roughly align with the outline above.".to_string(),
        "- You can add `###` sub-sections where it makes sense.".to_string(),
        "- Use bullet lists and numbered lists for steps.".to_string(),
        "- Keep paragraphs fairly short and readable.".to_string(),
        String::new(),
        "Code blocks:".to_string(),
        "- Use fenced code blocks with language identifiers: ```ts, ```tsx, ```js, etc.".to_string(),
        "- For any non-trivial snippet (more than ~5 lines), include a filename in the fence meta,".to_string(),
        "  e.g. ```ts filename=\"src/lib/api.ts\".".to_string(),
        "- At least 2-3 real snippets a dev could copy and adapt, tied to the explanation.".to_string(),
        "- Mermaid diagram blocks (```mermaid) are welcome where a diagram explains more than prose.".to_string(),
        String::new(),
        "Ending signature:".to_string(),
        "- The article MUST end with exactly this two-line signature:".to_string(),
        format!("{SIGNATURE_FIRST_LINE}  "),
        SIGNATURE_SECOND_LINE.to_string(),
        String::new(),
        "Return ONLY the MDX body text.".to_string(),
        "No frontmatter, no extra explanations, no markdown fences around the whole output.".to_string(),
    ]
    .join("\n")
}

/// Fixed system instruction block for monthly plan generation.
pub fn plan_instructions() -> String {
    [
        "You are planning a month of content for a personal dev blog.",
        "Tone: friendly, clear, slightly informal, opinionated, but still serious",
        "enough for professional devs.",
        "The blog focuses on modern web dev, Node.js, React, TypeScript, Astro,",
        "architecture, testing, and dev career topics.",
        "",
        "You are generating a content plan for ONE MONTH.",
        "Rules:",
        "- Plan about 2-3 posts per week (roughly 8-12 posts total).",
        "- Mix the categories across the month:",
        "  * 'trending'   -> things happening now in the industry.",
        "  * 'tutorial'   -> practical how-to guides with concrete code examples.",
        "  * 'deep-dive'  -> conceptual/architectural pieces.",
        "- All dates must be within the month.",
        "- Distribute posts across the month (not all in week one).",
        "- Prefer weekdays; avoid weekends unless it really fits.",
        "",
        "Output format is VERY important:",
        "- You MUST return a single JSON object, no markdown, no backticks, no comments.",
        "- It MUST match this shape exactly:",
        "",
        "{",
        "  \"month\": \"YYYY-MM\",",
        "  \"startDate\": \"YYYY-MM-DD\",",
        "  \"endDate\": \"YYYY-MM-DD\",",
        "  \"articles\": [{",
        "    \"date\": \"YYYY-MM-DD\",",
        "    \"category\": \"tutorial\" | \"trending\" | \"deep-dive\",",
        "    \"slug\": \"kebab-case-slug-without-date-prefix\",",
        "    \"title\": \"...\",",
        "    \"description\": \"1-2 sentence meta description\",",
        "    \"tags\": [\"3-7 useful tags\"],",
        "    \"status\": \"planned\",",
        "    \"angle\": \"what makes this article valuable\",",
        "    \"outline\": [\"3-7 section ideas\"],",
        "    \"codeIdeas\": [\"2-4 concrete code examples\"],",
        "    \"mediaIdeas\": [\"1-3 ideas for diagrams/images\"]",
        "  }]",
        "}",
        "",
        "Set `status` to `planned` for every article. `month`, `startDate` and",
        "`endDate` will be overridden with the real calendar values anyway.",
    ]
    .join("\n")
}

/// Assembles the user-turn prompt for one month's plan.
pub fn plan_prompt(month_name: &str, start: Date, end: Date, today: Date) -> String {
    [
        format!("Today is {today}."),
        format!("Create a content plan for my dev blog for {month_name} ({start} -> {end})."),
        String::new(),
        "Return between 8 and 12 articles.".to_string(),
        "- Use only dates within this month.".to_string(),
        "- Use my voice: candid, honest, dev-to-dev, not corporate.".to_string(),
        "- Titles, descriptions and angles must clearly show the value.".to_string(),
        String::new(),
        "Return ONLY the JSON object, no explanation, no markdown.".to_string(),
    ]
    .join("\n")
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        "- (none)".to_string()
    } else {
        items
            .iter()
            .map(|i| format!("- {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn placement_label(hint: &ImageRequest) -> String {
    match (&hint.section, hint.placement) {
        (Some(section), _) => format!("after the \"{section}\" section"),
        (None, ImagePlacement::MidArticle) => "mid-article".to_string(),
        (None, ImagePlacement::BeforeConclusion) => "before the conclusion".to_string(),
        (None, ImagePlacement::AfterSection(i)) => format!("after section {}", i + 1),
        (None, ImagePlacement::Frontmatter) => "frontmatter".to_string(),
    }
}
