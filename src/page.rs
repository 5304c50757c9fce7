use serde::{Deserialize, Serialize};
use std::fmt;

/// Campaign message attached to every share link unless the config overrides it.
pub const DEFAULT_SHARE_TEXT: &str = "Stand with Iran - Woman, Life, Freedom ✊ زن، زندگی، آزادی";

/// The page being shared, captured once when an operation is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContext {
    pub url: String,
    pub title: String,
}

impl PageContext {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShareText(String);

impl ShareText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ShareText {
    fn default() -> Self {
        Self::new(DEFAULT_SHARE_TEXT)
    }
}

impl fmt::Display for ShareText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_share_text() {
        let text = ShareText::default();
        assert!(text.as_str().starts_with("Stand with Iran"));
        assert!(text.as_str().contains("آزادی"));
    }

    #[test]
    fn test_share_text_serializes_as_plain_string() {
        let text = ShareText::new("hello");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"hello\"");
    }
}
