use crate::content;
use crate::core::manifest::{Manifest, MANIFEST_PATH};
use crate::core::{ConfigProvider, Content, Pipeline, RenderedSite, SiteFile, Storage};
use crate::render::page::STYLESHEET_PATH;
use crate::render::{render_page, stylesheet};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const INDEX_PATH: &str = "index.html";
pub const ARCHIVE_PATH: &str = "site.zip";

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Bundle every site file into one zip, paths kept relative to the root.
pub fn build_archive(files: &[SiteFile]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for file in files {
        zip.start_file::<_, ()>(file.path.as_str(), FileOptions::default())?;
        zip.write_all(&file.contents)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<Content> {
        content::load(self.config.content_path())
    }

    async fn transform(&self, content: Content) -> Result<RenderedSite> {
        let page = render_page(&content);
        let css = stylesheet();

        let mut manifest = Manifest::new(
            &page.title,
            vec![
                INDEX_PATH.to_string(),
                STYLESHEET_PATH.to_string(),
                MANIFEST_PATH.to_string(),
            ],
        );
        manifest.projects = content.projects.len();
        manifest.skills = content.skills.len();
        manifest.animated_nodes = page.timeline.len();

        tracing::debug!(
            "Page timeline: {} reveals, last one settles at {}ms",
            page.timeline.len(),
            page.timeline.total_duration_ms()
        );

        let files = vec![
            SiteFile {
                path: INDEX_PATH.to_string(),
                contents: page.html.into_bytes(),
            },
            SiteFile {
                path: STYLESHEET_PATH.to_string(),
                contents: css.into_bytes(),
            },
            SiteFile {
                path: MANIFEST_PATH.to_string(),
                contents: serde_json::to_vec_pretty(&manifest)?,
            },
        ];

        Ok(RenderedSite {
            files,
            project_count: content.projects.len(),
            skill_count: content.skills.len(),
        })
    }

    async fn load(&self, site: RenderedSite) -> Result<String> {
        for file in &site.files {
            tracing::debug!("Writing {} ({} bytes)", file.path, file.contents.len());
            self.storage.write_file(&file.path, &file.contents).await?;
        }

        if self.config.archive() {
            let archive = build_archive(&site.files)?;
            tracing::debug!("Writing {} ({} bytes)", ARCHIVE_PATH, archive.len());
            self.storage.write_file(ARCHIVE_PATH, &archive).await?;
        }

        Ok(format!("{}/{}", self.config.output_path(), INDEX_PATH))
    }
}
