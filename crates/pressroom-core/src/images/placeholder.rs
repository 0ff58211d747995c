//! Deterministic placeholder provider. Cannot fail; the last link of the
//! fallback chain.

use crate::models::{ImageResult, Orientation};

pub const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos";

const MAX_SEED_LEN: usize = 50;

/// Derives a stable placeholder seed from a search query.
///
/// Lowercases, collapses non-alphanumeric runs to single hyphens, trims
/// leading/trailing hyphens, and truncates to 50 characters. A query with
/// no alphanumeric characters yields an empty seed.
pub fn seed_from_query(query: &str) -> String {
    let mut seed = String::new();
    for c in query.chars() {
        if c.is_ascii_alphanumeric() {
            seed.push(c.to_ascii_lowercase());
        } else if !seed.is_empty() && !seed.ends_with('-') {
            seed.push('-');
        }
    }
    seed.truncate(MAX_SEED_LEN);
    seed.trim_end_matches('-').to_string()
}

/// Builds a placeholder image descriptor for a query.
///
/// 1200x630 for landscape, 1200x1600 for portrait. No attribution fields:
/// placeholders carry no author.
pub fn placeholder_image(query: &str, orientation: Orientation) -> ImageResult {
    let (width, height) = match orientation {
        Orientation::Landscape => (1200, 630),
        Orientation::Portrait => (1200, 1600),
    };
    let seed = seed_from_query(query);

    ImageResult {
        url: format!("{PLACEHOLDER_BASE_URL}/seed/{seed}/{width}/{height}"),
        alt: format!("Illustration for {query}"),
        author: None,
        author_url: None,
        unsplash_url: None,
        download_location: None,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn seed_collapses_symbol_runs() {
        assert_eq!(seed_from_query("React Hooks Deep Dive"), "react-hooks-deep-dive");
        assert_eq!(seed_from_query("node.js -- server!!code"), "node-js-server-code");
    }

    #[test]
    fn seed_trims_boundary_hyphens() {
        assert_eq!(seed_from_query("  react  "), "react");
        assert_eq!(seed_from_query("!react!"), "react");
    }

    #[test]
    fn seed_of_pure_symbols_is_empty() {
        assert_eq!(seed_from_query("!!!"), "");
    }

    #[test]
    fn portrait_dimensions_differ() {
        let landscape = placeholder_image("react", Orientation::Landscape);
        let portrait = placeholder_image("react", Orientation::Portrait);
        assert!(landscape.url.ends_with("/seed/react/1200/630"));
        assert!(portrait.url.ends_with("/seed/react/1200/1600"));
    }

    proptest! {
        #[test]
        fn seed_is_bounded_kebab_case(query in ".{1,200}") {
            let seed = seed_from_query(&query);
            prop_assert!(seed.len() <= 50);
            prop_assert!(!seed.starts_with('-'));
            prop_assert!(!seed.ends_with('-'));
            prop_assert!(!seed.contains("--"));
            prop_assert!(seed
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }
}
