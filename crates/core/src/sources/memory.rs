use async_trait::async_trait;

use crate::errors::CoreError;

use super::traits::SeriesSource;

/// Text that is already in memory, e.g. handed over by a browser file reader.
pub struct TextSource {
    name: String,
    text: String,
}

impl TextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Decode raw bytes as UTF-8.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, CoreError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| CoreError::InvalidJson(format!("file is not valid UTF-8: {e}")))?;
        Ok(Self::new(name, text))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl SeriesSource for TextSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn read_text(&self) -> Result<String, CoreError> {
        Ok(self.text.clone())
    }
}
