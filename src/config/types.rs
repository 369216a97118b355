use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Extraction configuration for manual content
///
/// Replaces the ambient key-value settings of the original host: callers
/// build (or deserialize) one of these and pass it into every extraction
/// call explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualConfig {
    /// Heading tags to scan, in scan order
    #[serde(default = "defaults::default_heading_tags")]
    pub heading_tags: Vec<String>,

    /// Insert "back to top" links before headings and at the end of the content
    #[serde(default)]
    pub back_to_top: bool,

    /// Tag image links with a lightbox class and zoom title
    #[serde(default)]
    pub lightbox: bool,
}

impl Default for ManualConfig {
    fn default() -> Self {
        ManualConfig {
            heading_tags: defaults::default_heading_tags(),
            back_to_top: false,
            lightbox: false,
        }
    }
}

impl ManualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading tags to scan (scan order is the given order)
    pub fn with_heading_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.heading_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable back-to-top links
    pub fn with_back_to_top(mut self, enabled: bool) -> Self {
        self.back_to_top = enabled;
        self
    }

    /// Enable or disable lightbox tagging of image links
    pub fn with_lightbox(mut self, enabled: bool) -> Self {
        self.lightbox = enabled;
        self
    }

    /// Compiled scan patterns for the configured heading tags, in configured
    /// order. The pattern is non-greedy and case-insensitive but does not
    /// cross newlines, matching the behavior anchors were historically
    /// generated with. Tags that are not plain ASCII tag names are skipped
    /// with a warning rather than interpolated into a pattern.
    pub(crate) fn heading_patterns(&self) -> Vec<(String, Regex)> {
        self.heading_tags
            .iter()
            .filter_map(|tag| {
                if !is_tag_name(tag) {
                    log::warn!("Skipping invalid heading tag in configuration: {:?}", tag);
                    return None;
                }

                let tag = tag.to_lowercase();
                let pattern = format!("(?i)<{0}[^>]*>(.*?)</{0}>", tag);

                match Regex::new(&pattern) {
                    Ok(re) => Some((tag, re)),
                    Err(e) => {
                        log::warn!("Failed to compile heading pattern for {:?}: {}", tag, e);
                        None
                    }
                }
            })
            .collect()
    }
}

/// Check a configured tag is a plain ASCII tag name (letter first)
pub(crate) fn is_tag_name(tag: &str) -> bool {
    let mut chars = tag.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_heading_tags() {
        let config = ManualConfig::default();
        assert_eq!(
            config.heading_tags,
            vec!["h1", "h2", "h3", "h4", "h5", "h6"]
        );
        assert!(!config.back_to_top);
        assert!(!config.lightbox);
    }

    #[test]
    fn test_builder_methods() {
        let config = ManualConfig::new()
            .with_heading_tags(["h2", "h3"])
            .with_back_to_top(true)
            .with_lightbox(true);

        assert_eq!(config.heading_tags, vec!["h2", "h3"]);
        assert!(config.back_to_top);
        assert!(config.lightbox);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ManualConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.heading_tags.len(), 6);
        assert!(!config.back_to_top);

        let config: ManualConfig =
            serde_json::from_str(r#"{"heading_tags": ["h2"], "lightbox": true}"#).unwrap();
        assert_eq!(config.heading_tags, vec!["h2"]);
        assert!(config.lightbox);
    }

    #[test]
    fn test_heading_patterns_skip_invalid_tags() {
        let config = ManualConfig::new().with_heading_tags(["h2", "h3[", "", "h4"]);
        let patterns = config.heading_patterns();

        let tags: Vec<&str> = patterns.iter().map(|(tag, _)| tag.as_str()).collect();
        assert_eq!(tags, vec!["h2", "h4"]);
    }

    #[test]
    fn test_heading_pattern_matching() {
        let config = ManualConfig::new().with_heading_tags(["h2"]);
        let patterns = config.heading_patterns();
        let (_, re) = &patterns[0];

        // Case-insensitive, attributes allowed
        assert!(re.is_match("<h2>Title</h2>"));
        assert!(re.is_match("<H2 class=\"x\">Title</H2>"));
        assert!(!re.is_match("<h3>Title</h3>"));

        // A heading split across lines does not match
        assert!(!re.is_match("<h2>Line one\nline two</h2>"));
    }

    #[test]
    fn test_is_tag_name() {
        assert!(is_tag_name("h1"));
        assert!(is_tag_name("header"));
        assert!(!is_tag_name(""));
        assert!(!is_tag_name("1h"));
        assert!(!is_tag_name("h1[^>]"));
    }
}
