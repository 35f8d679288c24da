use anyhow::Result;
use folio_gen::core::manifest::Manifest;
use folio_gen::utils::error::SiteError;
use folio_gen::{CliConfig, LocalStorage, SiteEngine, SitePipeline};
use std::io::Read;
use tempfile::TempDir;

fn config_for(output_path: &str) -> CliConfig {
    CliConfig {
        content: None,
        output_path: output_path.to_string(),
        archive: false,
        export_content: None,
        dry_run: false,
        monitor: false,
        verbose: false,
        log_json: false,
    }
}

#[tokio::test]
async fn test_end_to_end_build_with_builtin_content() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = SitePipeline::new(storage, config_for(&output_path));
    let engine = SiteEngine::new(pipeline);

    let written = engine.run().await?;
    assert!(written.ends_with("index.html"));

    let html = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<link rel="stylesheet" href="styles.css">"#));
    assert!(html.contains("<title>Brian Kiprono Ngetich — Portfolio</title>"));

    let css = std::fs::read_to_string(temp_dir.path().join("styles.css"))?;
    assert!(css.contains("@keyframes reveal-header"));

    let manifest: Manifest =
        serde_json::from_slice(&std::fs::read(temp_dir.path().join("manifest.json"))?)?;
    assert_eq!(manifest.generator, "folio-gen");
    assert_eq!(manifest.projects, 2);
    assert_eq!(manifest.skills, 11);
    assert_eq!(manifest.animated_nodes, 17);
    assert_eq!(
        manifest.files,
        vec!["index.html", "styles.css", "manifest.json"]
    );

    assert!(!temp_dir.path().join("site.zip").exists());
    Ok(())
}

#[tokio::test]
async fn test_archive_bundles_every_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&output_path);
    config.archive = true;
    let pipeline = SitePipeline::new(LocalStorage::new(output_path.clone()), config);
    SiteEngine::new_with_monitoring(pipeline, true).run().await?;

    let zip_data = std::fs::read(temp_dir.path().join("site.zip"))?;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data))?;
    assert_eq!(archive.len(), 3);

    let mut page = String::new();
    archive.by_name("index.html")?.read_to_string(&mut page)?;
    let on_disk = std::fs::read_to_string(temp_dir.path().join("index.html"))?;
    assert_eq!(page, on_disk);

    assert!(archive.by_name("styles.css").is_ok());
    assert!(archive.by_name("manifest.json").is_ok());
    Ok(())
}

#[tokio::test]
async fn test_rebuild_produces_identical_page() -> Result<()> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    for dir in [&first, &second] {
        let output_path = dir.path().to_str().unwrap().to_string();
        let pipeline =
            SitePipeline::new(LocalStorage::new(output_path.clone()), config_for(&output_path));
        SiteEngine::new(pipeline).run().await?;
    }

    for file in ["index.html", "styles.css"] {
        assert_eq!(
            std::fs::read(first.path().join(file))?,
            std::fs::read(second.path().join(file))?
        );
    }
    Ok(())
}

#[tokio::test]
async fn test_missing_content_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = config_for(&output_path);
    config.content = Some(temp_dir.path().join("nope.toml").to_string_lossy().into_owned());
    let pipeline = SitePipeline::new(LocalStorage::new(output_path.clone()), config);

    let err = SiteEngine::new(pipeline).run().await.unwrap_err();
    assert!(matches!(err, SiteError::IoError(_)));
    assert!(!temp_dir.path().join("index.html").exists());
    Ok(())
}
