pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::{engine::SiteEngine, pipeline::SitePipeline};
pub use domain::model::{Content, Profile, Project, SkillCategory, Skills, SocialLink};
pub use utils::error::{Result, SiteError};
