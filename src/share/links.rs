use serde::Serialize;

use super::encode::encode_component;
use super::{Platform, WindowFeatures};
use crate::page::{PageContext, ShareText};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub platform: Platform,
    pub url: String,
    pub window: WindowFeatures,
}

/// Build the deep link for one platform.
///
/// `popup` is applied only to platforms that open as a sized dialog.
pub fn build_share_link(
    platform: Platform,
    page: &PageContext,
    text: &ShareText,
    popup: WindowFeatures,
) -> ShareLink {
    let page_url = encode_component(&page.url);
    let share_text = encode_component(text.as_str());

    let url = match platform {
        Platform::Twitter => {
            format!("https://twitter.com/intent/tweet?text={share_text}&url={page_url}")
        }
        Platform::Facebook => format!("https://www.facebook.com/sharer/sharer.php?u={page_url}"),
        // `%20` separates the already-encoded text and URL.
        Platform::WhatsApp => format!("https://wa.me/?text={share_text}%20{page_url}"),
        Platform::Telegram => format!("https://t.me/share/url?url={page_url}&text={share_text}"),
    };

    let window = if platform.opens_as_popup() {
        popup
    } else {
        WindowFeatures::default()
    };

    ShareLink {
        platform,
        url,
        window,
    }
}

pub fn build_share_links(
    page: &PageContext,
    text: &ShareText,
    popup: WindowFeatures,
) -> Vec<ShareLink> {
    Platform::ALL
        .iter()
        .map(|platform| build_share_link(*platform, page, text, popup))
        .collect()
}
