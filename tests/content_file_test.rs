use anyhow::Result;
use folio_gen::content::{self, defaults};
use folio_gen::utils::error::SiteError;
use folio_gen::{CliConfig, LocalStorage, SiteEngine, SitePipeline};
use tempfile::TempDir;

const CUSTOM: &str = r#"
[profile]
name = "Grace Hopper"
short_name = "Grace"
tagline = "Compiler pioneer"
intro = "I make machines speak English."
bio = "a computer scientist."
about = ["Wrote the **first** compiler"]
philosophy = "It's easier to ask forgiveness than it is to get permission."
focus = ["COBOL", "Nanoseconds"]
footer_note = "Thanks for visiting"
footer_sign_off = "Go build something."

[[profile.socials]]
href = "https://github.com/${FOLIO_TEST_HANDLE}"
text = "GitHub"

[[profile.socials]]
href = "mailto:grace@example.com"
text = "Email"

[skills]
languages = ["rust", "go"]
frameworks = []
tools = ["git"]

[[projects]]
title = "Mark I"
emoji = "🧮"
description = "Harvard Mark I programs"
link = "https://example.com/mark-i"
image = "https://example.com/mark-i.png"

[[projects]]
title = "A-0 <System>"
emoji = "⚙️"
description = "First compiler & linker"
link = "https://example.com/a-0?x=1&y=2"
image = "https://example.com/a-0.png"
"#;

#[tokio::test]
async fn test_build_from_custom_content_file() -> Result<()> {
    std::env::set_var("FOLIO_TEST_HANDLE", "ghopper");

    let temp_dir = TempDir::new()?;
    let content_path = temp_dir.path().join("site.toml");
    std::fs::write(&content_path, CUSTOM)?;
    let output_dir = temp_dir.path().join("out");
    let output_path = output_dir.to_string_lossy().into_owned();

    let config = CliConfig {
        content: Some(content_path.to_string_lossy().into_owned()),
        output_path: output_path.clone(),
        ..Default::default()
    };
    let pipeline = SitePipeline::new(LocalStorage::new(output_path.clone()), config);
    SiteEngine::new(pipeline).run().await?;

    let html = std::fs::read_to_string(output_dir.join("index.html"))?;
    assert!(html.contains("Hi 👋, I&#39;m Grace Hopper"));
    assert!(html.contains(r#"href="https://github.com/ghopper""#));
    assert!(html.contains("icons?i=rust,go\""));
    assert!(html.contains("icons?i=\""));
    assert!(html.contains("<h3>⚙️ A-0 &lt;System&gt;</h3>"));
    assert!(html.contains(r#"href="https://example.com/a-0?x=1&amp;y=2""#));
    assert!(html.contains("Wrote the <strong>first</strong> compiler"));
    assert_eq!(html.matches(r#"class="social-link""#).count(), 4);

    std::env::remove_var("FOLIO_TEST_HANDLE");
    Ok(())
}

#[tokio::test]
async fn test_invalid_content_file_fails_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content_path = temp_dir.path().join("site.toml");
    std::fs::write(
        &content_path,
        CUSTOM.replace("https://example.com/mark-i\"", "mark-i.html\""),
    )?;
    let output_path = temp_dir.path().join("out").to_string_lossy().into_owned();

    let config = CliConfig {
        content: Some(content_path.to_string_lossy().into_owned()),
        output_path: output_path.clone(),
        ..Default::default()
    };
    let pipeline = SitePipeline::new(LocalStorage::new(output_path.clone()), config);
    let err = SiteEngine::new(pipeline).run().await.unwrap_err();

    match err {
        SiteError::InvalidConfigValueError { field, .. } => assert_eq!(field, "projects[0].link"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[test]
fn test_exported_defaults_load_back_unchanged() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("content.toml");
    std::fs::write(&path, content::file::to_toml_string(&defaults::content())?)?;

    let loaded = content::load(Some(path.to_str().unwrap()))?;
    assert_eq!(loaded, defaults::content());
    Ok(())
}
