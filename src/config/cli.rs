use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        Ok(tokio::fs::read(full_path).await?)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_parent_dirs_and_reads_back() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        tokio_test::block_on(async {
            storage
                .write_file("nested/dir/page.html", b"<p>hi</p>")
                .await
                .unwrap();
            let data = storage.read_file("nested/dir/page.html").await.unwrap();
            assert_eq!(data, b"<p>hi</p>");
        });
    }
}
