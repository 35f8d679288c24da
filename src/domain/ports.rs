use crate::domain::model::{Content, RenderedSite};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn archive(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Content>;
    async fn transform(&self, content: Content) -> Result<RenderedSite>;
    async fn load(&self, site: RenderedSite) -> Result<String>;
}
