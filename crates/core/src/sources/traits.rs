use async_trait::async_trait;

use crate::errors::CoreError;

/// Where an uploaded company file comes from.
///
/// Reading the raw text is the only asynchronous step of a load. Once it
/// resolves, parsing, validation and state replacement run synchronously.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait SeriesSource: Send + Sync {
    /// Human-readable name of this source (file name, "upload", ...), for logs.
    fn name(&self) -> &str;

    /// Read the full contents as UTF-8 text.
    async fn read_text(&self) -> Result<String, CoreError>;
}
