//! Image acquisition: request planning and the provider fallback chain.

pub mod placeholder;
pub mod planner;
pub mod resolver;

mod pexels;
mod unsplash;

pub use placeholder::{placeholder_image, seed_from_query, PLACEHOLDER_BASE_URL};
pub use planner::{alt_text, hero_query, plan_image_requests, MAX_IMAGE_REQUESTS};
pub use resolver::ImageResolver;
