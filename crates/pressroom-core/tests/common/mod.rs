use std::path::Path;

use pressroom_core::{PipelineConfig, Publisher, PublisherBuilder};
use serde_json::{json, Value};
use tempfile::TempDir;

/// Helper function to create a temporary content root
pub fn create_content_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Helper function to build a publisher over a content root with an
/// explicit configuration
pub fn create_test_publisher(root: &Path, config: PipelineConfig) -> Publisher {
    PublisherBuilder::new()
        .with_root(Some(root))
        .with_config(config)
        .build()
        .expect("Failed to create publisher")
}

/// A minimal June 2025 plan with one tutorial scheduled on the 3rd and one
/// on the 4th
pub fn sample_plan_json() -> Value {
    json!({
        "month": "2025-06",
        "startDate": "2025-06-01",
        "endDate": "2025-06-30",
        "articles": [
            {
                "date": "2025-06-03",
                "category": "tutorial",
                "slug": "react-hooks",
                "title": "React Hooks Deep Dive",
                "description": "All about hooks",
                "tags": ["react", "hooks"],
                "status": "planned",
                "outline": [],
                "codeIdeas": [],
                "mediaIdeas": []
            },
            {
                "date": "2025-06-04",
                "category": "deep-dive",
                "slug": "event-loop",
                "title": "Inside the Event Loop",
                "description": "How the runtime schedules work",
                "tags": ["nodejs"],
                "status": "planned",
                "outline": [],
                "codeIdeas": [],
                "mediaIdeas": []
            }
        ]
    })
}

/// Writes a plan document under `content-plans/<month>.json`
pub fn write_plan(root: &Path, month: &str, plan: &Value) {
    let dir = root.join("content-plans");
    std::fs::create_dir_all(&dir).expect("Failed to create plan dir");
    let serialized = serde_json::to_string_pretty(plan).expect("Failed to serialize plan");
    std::fs::write(dir.join(format!("{month}.json")), serialized + "\n")
        .expect("Failed to write plan file");
}

/// Reads a plan document back as raw JSON
pub fn read_plan(root: &Path, month: &str) -> Value {
    let raw = std::fs::read_to_string(root.join("content-plans").join(format!("{month}.json")))
        .expect("Failed to read plan file");
    serde_json::from_str(&raw).expect("Plan file is not valid JSON")
}
