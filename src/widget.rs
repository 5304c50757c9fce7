use tracing::{debug, info};

use crate::host::ShareHost;
use crate::page::{PageContext, ShareText};
use crate::share::{build_share_link, Platform, ShareLink, WindowFeatures};
use crate::toast::Toast;

/// Share buttons and copy-link action for one page.
pub struct ShareWidget<H: ShareHost> {
    host: H,
    page: PageContext,
    text: ShareText,
    popup: WindowFeatures,
    toast: Toast,
}

impl<H: ShareHost> ShareWidget<H> {
    pub fn new(host: H, page: PageContext, text: ShareText) -> Self {
        Self {
            host,
            page,
            text,
            popup: WindowFeatures::popup(),
            toast: Toast::default(),
        }
    }

    pub fn with_popup(mut self, popup: WindowFeatures) -> Self {
        self.popup = popup;
        self
    }

    pub fn with_toast(mut self, toast: Toast) -> Self {
        self.toast = toast;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    pub fn link_for(&self, platform: Platform) -> ShareLink {
        build_share_link(platform, &self.page, &self.text, self.popup)
    }

    /// Open the share dialog for `platform`. Whether the host actually shows it is not observable.
    pub fn share_to(&self, platform: Platform) {
        let link = self.link_for(platform);
        info!(platform = %platform, "Opening share dialog");
        self.host.open_window(&link.url, link.window);
    }

    /// Copy the page URL and flash the toast. A rejected clipboard write is swallowed.
    pub async fn copy_current_link(&self) {
        match self.host.write_clipboard(&self.page.url).await {
            Ok(()) => {
                info!(url = %self.page.url, "Copied page link");
                self.toast.flash();
            }
            Err(e) => {
                debug!(error = %e, "Clipboard write rejected");
            }
        }
    }
}
