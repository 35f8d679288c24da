pub mod engine;
pub mod manifest;
pub mod pipeline;

pub use crate::domain::model::{Content, RenderedSite, SiteFile};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
