//! Image request and result models.
//!
//! A request describes what the pipeline wants (purpose, placement, alt
//! text); a result describes what a provider returned (URL, attribution).
//! The two are carried side by side in [`ResolvedImage`] rather than merged
//! into one flat record, so provider fields can never shadow request fields.

use std::fmt;

/// What role an image plays in the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePurpose {
    /// The single mandatory lead image, stored in front-matter
    Hero,
    /// Architecture/structure illustration
    Diagram,
    /// Side-by-side comparison illustration
    Comparison,
    /// Workflow/process illustration
    FlowDiagram,
    /// Code-editor style screenshot
    Screenshot,
}

impl ImagePurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePurpose::Hero => "hero",
            ImagePurpose::Diagram => "diagram",
            ImagePurpose::Comparison => "comparison",
            ImagePurpose::FlowDiagram => "flow-diagram",
            ImagePurpose::Screenshot => "screenshot",
        }
    }
}

impl fmt::Display for ImagePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in the document an image should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePlacement {
    /// Front-matter hero fields, not the body
    Frontmatter,
    /// Middle of the body's section list
    MidArticle,
    /// Just before a conclusion-like heading
    BeforeConclusion,
    /// After the paragraph that opens outline section `N` (0-based)
    AfterSection(usize),
}

/// Requested orientation, forwarded to providers and the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
}

impl Orientation {
    /// Provider query-parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
        }
    }
}

/// A derived image lookup, produced by the request planner.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRequest {
    /// Search string sent to providers
    pub query: String,

    /// Role the image plays
    pub purpose: ImagePurpose,

    /// Requested orientation
    pub orientation: Orientation,

    /// Intended body position
    pub placement: ImagePlacement,

    /// Originating outline entry text; `None` for the hero
    pub section: Option<String>,

    /// Pre-generated accessible description
    pub alt: String,
}

/// A normalized image descriptor from any provider in the fallback chain.
///
/// `url` must be hot-linked as returned (plus provider-documented resize
/// parameters); some providers' terms forbid re-hosting.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageResult {
    pub url: String,
    pub alt: String,
    pub author: Option<String>,
    pub author_url: Option<String>,
    /// Result page link, required for primary-provider attribution
    pub unsplash_url: Option<String>,
    /// Download-tracking callback, primary provider only
    pub download_location: Option<String>,
}

/// A request paired with the result that satisfied it.
///
/// Accessors prefer request-origin data on overlap (the alt text), mirroring
/// the merge the composer expects.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub request: ImageRequest,
    pub image: ImageResult,
}

impl ResolvedImage {
    pub fn is_hero(&self) -> bool {
        self.request.purpose == ImagePurpose::Hero
    }

    pub fn url(&self) -> &str {
        &self.image.url
    }

    /// The accessible description: the planner's pre-generated alt wins over
    /// whatever the provider supplied.
    pub fn alt(&self) -> &str {
        &self.request.alt
    }

    pub fn author(&self) -> Option<&str> {
        self.image.author.as_deref()
    }

    pub fn author_url(&self) -> Option<&str> {
        self.image.author_url.as_deref()
    }
}
