use serde::{Deserialize, Serialize};

use crate::page::PageContext;
use crate::share::ShareLink;
use crate::toast::{TOAST_ELEMENT_ID, TOAST_VISIBLE_CLASS};

/// Query parameters naming the page to share. Missing fields fall back to the configured site.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub url: Option<String>,
    pub title: Option<String>,
}

impl PageQuery {
    pub fn resolve(self, site: &PageContext) -> PageContext {
        PageContext::new(
            self.url.unwrap_or_else(|| site.url.clone()),
            self.title.unwrap_or_else(|| site.title.clone()),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub url: String,
    pub title: String,
    pub links: Vec<ShareLink>,
    pub toast: ToastHint,
}

/// Tells a page script which element to toggle after a successful copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToastHint {
    pub element_id: &'static str,
    pub visible_class: &'static str,
    pub duration_ms: u64,
}

impl ToastHint {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            element_id: TOAST_ELEMENT_ID,
            visible_class: TOAST_VISIBLE_CLASS,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_query_values() {
        let site = PageContext::new("https://site.example/", "Site");
        let query = PageQuery {
            url: Some("https://other.example/".to_string()),
            title: None,
        };
        let page = query.resolve(&site);
        assert_eq!(page.url, "https://other.example/");
        assert_eq!(page.title, "Site");
    }

    #[test]
    fn test_toast_hint_names_copy_toast() {
        let json = serde_json::to_value(ToastHint::new(2000)).unwrap();
        assert_eq!(json["element_id"], "copyToast");
        assert_eq!(json["visible_class"], "show");
        assert_eq!(json["duration_ms"], 2000);
    }
}
