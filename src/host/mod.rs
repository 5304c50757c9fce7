pub mod system;

pub use system::SystemHost;

use crate::share::WindowFeatures;
use anyhow::Result;
use std::future::Future;

/// Primitives the embedding environment provides to the share widget.
pub trait ShareHost: Send + Sync {
    /// Open `url` in a new browsing context. Fire-and-forget: failures are not reported.
    fn open_window(&self, url: &str, features: WindowFeatures);

    /// Write `text` to the clipboard. The returned future rejects when the host refuses.
    fn write_clipboard(&self, text: &str) -> impl Future<Output = Result<()>> + Send;
}
