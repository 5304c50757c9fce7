use anyhow::{anyhow, Context, Result};
use arboard::Clipboard;
use std::sync::mpsc;
use std::thread;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::ShareHost;
use crate::share::WindowFeatures;

/// Something that can take ownership of clipboard text.
pub trait TextClipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

impl TextClipboard for Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        Clipboard::set_text(self, text).context("Failed to copy text to clipboard")
    }
}

struct CopyRequest {
    text: String,
    reply: oneshot::Sender<Result<()>>,
}

/// Handle to a thread that owns one clipboard for as long as the handle lives.
///
/// On X11 and Wayland the copied text is served by the owning process, so it
/// disappears (absent a clipboard manager) once the clipboard is dropped.
pub struct ClipboardWorker {
    tx: mpsc::Sender<CopyRequest>,
}

impl ClipboardWorker {
    /// Spawn the worker. `open` runs on the worker thread, lazily, and again after a failure.
    pub fn spawn<C, F>(mut open: F) -> Result<Self>
    where
        C: TextClipboard + 'static,
        F: FnMut() -> Result<C> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<CopyRequest>();

        thread::Builder::new()
            .name("sharekit-clipboard".to_string())
            .spawn(move || {
                let mut clipboard: Option<C> = None;
                while let Ok(request) = rx.recv() {
                    if clipboard.is_none() {
                        match open() {
                            Ok(c) => clipboard = Some(c),
                            Err(e) => {
                                let _ = request.reply.send(Err(e));
                                continue;
                            }
                        }
                    }
                    let result = match clipboard.as_mut() {
                        Some(c) => c.set_text(&request.text),
                        None => Err(anyhow!("Clipboard unavailable")),
                    };
                    let _ = request.reply.send(result);
                }
                debug!("Clipboard worker stopped");
            })
            .context("Failed to start clipboard worker")?;

        Ok(Self { tx })
    }

    pub async fn copy(&self, text: &str) -> Result<()> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(CopyRequest {
                text: text.to_string(),
                reply,
            })
            .map_err(|_| anyhow!("Clipboard worker is not running"))?;
        response
            .await
            .map_err(|_| anyhow!("Clipboard worker dropped the request"))?
    }
}

/// Desktop host: the default browser opens links, the system clipboard receives copies.
///
/// Copied text stays available while the host is alive.
pub struct SystemHost {
    clipboard: ClipboardWorker,
}

impl SystemHost {
    pub fn new() -> Result<Self> {
        let clipboard = ClipboardWorker::spawn(|| {
            Clipboard::new().context("Failed to access system clipboard")
        })?;
        Ok(Self { clipboard })
    }
}

impl ShareHost for SystemHost {
    fn open_window(&self, url: &str, features: WindowFeatures) {
        if !features.is_default() {
            // The OS opener has no notion of window size.
            debug!(features = %features, "Ignoring window features for system browser");
        }
        if let Err(e) = open::that(url) {
            warn!(error = %e, "Failed to open browser");
        }
    }

    async fn write_clipboard(&self, text: &str) -> Result<()> {
        self.clipboard.copy(text).await
    }
}
