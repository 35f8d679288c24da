use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MANIFEST_PATH: &str = "manifest.json";

/// Build record written next to the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub generator: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub page_title: String,
    pub files: Vec<String>,
    pub projects: usize,
    pub skills: usize,
    pub animated_nodes: usize,
}

impl Manifest {
    pub fn new(page_title: &str, files: Vec<String>) -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            page_title: page_title.to_string(),
            files,
            projects: 0,
            skills: 0,
            animated_nodes: 0,
        }
    }
}
