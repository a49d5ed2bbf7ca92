use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::errors::CoreError;

use super::traits::SeriesSource;

/// A company file on the local disk (native only).
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeriesSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> Result<String, CoreError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = text.len(), "read company file");
        Ok(text)
    }
}
