pub mod defaults;
pub mod file;

use crate::domain::model::Content;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Content for a build: the file at `path` (validated), or the built-in tables.
pub fn load(path: Option<&str>) -> Result<Content> {
    match path {
        Some(path) => {
            tracing::debug!("Loading content from {}", path);
            let content = file::from_file(path)?;
            content.validate()?;
            Ok(content)
        }
        None => {
            tracing::debug!("Using built-in content");
            Ok(defaults::content())
        }
    }
}
