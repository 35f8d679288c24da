use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::BuildMonitor;

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Load content, render, write. Returns the path of the written page.
    pub async fn run(&self) -> Result<String> {
        let mut monitor = BuildMonitor::new(self.monitor_enabled);
        tracing::info!("Starting site build");

        let content = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded content: {} projects, {} skills",
            content.projects.len(),
            content.skills.len()
        );
        monitor.mark("content");

        let site = self.pipeline.transform(content).await?;
        tracing::info!("Rendered {} files", site.files.len());
        monitor.mark("render");

        let output_path = self.pipeline.load(site).await?;
        tracing::info!("Site written to {}", output_path);
        monitor.mark("write");

        monitor.log_final_stats();
        Ok(output_path)
    }
}
