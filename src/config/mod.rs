pub mod cli;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "folio-gen")]
#[command(about = "Generate a static, animated portfolio page")]
pub struct CliConfig {
    /// TOML content file; the built-in content is used when omitted
    #[arg(short, long)]
    pub content: Option<String>,

    #[arg(short, long, default_value = "./dist")]
    pub output_path: String,

    /// Also write site.zip with every generated file
    #[arg(long)]
    pub archive: bool,

    /// Write the active content as TOML to this file and exit
    #[arg(long)]
    pub export_content: Option<String>,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Log per-phase timings
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn content_path(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        if let Some(content) = &self.content {
            validate_path("content", content)?;
        }
        if let Some(export) = &self.export_content {
            validate_path("export_content", export)?;
        }
        Ok(())
    }
}
