use clap::Parser;
use folio_gen::content;
use folio_gen::core::ConfigProvider;
use folio_gen::utils::error::{ErrorSeverity, SiteError};
use folio_gen::utils::{logger, validation::Validate};
use folio_gen::{CliConfig, LocalStorage, SiteEngine, SitePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_json);

    tracing::info!("Starting folio-gen");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    if let Some(target) = &config.export_content {
        let active = content::load(config.content_path()).unwrap_or_else(|e| fail(&e));
        let toml = content::file::to_toml_string(&active).unwrap_or_else(|e| fail(&e));
        tokio::fs::write(target, toml).await?;
        println!("✅ Content written to {}", target);
        return Ok(());
    }

    if config.dry_run {
        let active = content::load(config.content_path()).unwrap_or_else(|e| fail(&e));
        print_dry_run(&config, &active);
        return Ok(());
    }

    if config.monitor {
        tracing::info!("🔍 Phase timing enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let monitor = config.monitor;
    let pipeline = SitePipeline::new(storage, config);
    let engine = SiteEngine::new_with_monitoring(pipeline, monitor);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Site generated successfully!");
            println!("📁 Open {}", output_path);
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &SiteError) -> ! {
    tracing::error!(
        "❌ Build failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

fn print_dry_run(config: &CliConfig, active: &folio_gen::Content) {
    println!("🔍 Dry Run:");
    println!(
        "  Content: {}",
        config.content.as_deref().unwrap_or("built-in")
    );
    println!("  Output: {}", config.output_path);
    println!("  Page: {}", active.profile.name);
    println!("  Projects:");
    for project in &active.projects {
        println!("    {} -> {}", project.display_title(), project.link);
    }
    println!("  Skills: {}", active.skills.len());
    println!("  Files: index.html, styles.css, manifest.json");
    if config.archive {
        println!("  Archive: site.zip");
    }
}
