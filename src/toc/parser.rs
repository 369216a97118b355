use std::collections::BTreeMap;

use crate::anchor::{anchor_slug, ParseState};
use crate::config::ManualConfig;
use crate::toc::TocEntry;

/// Extract the ordered table of contents from HTML content.
///
/// The content is scanned tag by tag in configured order, so slug numbering
/// follows the tag configuration, then entries are sorted back into document
/// order by the byte offset of each heading's inner text. The content itself
/// is never modified.
///
/// Empty content, or content without any configured heading, yields an
/// empty list.
pub fn extract_toc(content: &str, config: &ManualConfig) -> Vec<TocEntry> {
    if content.is_empty() {
        return Vec::new();
    }

    let mut state = ParseState::new();
    let mut found: BTreeMap<usize, TocEntry> = BTreeMap::new();

    for (tag, pattern) in config.heading_patterns() {
        for caps in pattern.captures_iter(content) {
            let inner = match caps.get(1) {
                Some(m) => m,
                None => continue,
            };

            // Headings with empty inner text produce no entry and do not
            // advance the slug counter
            let anchor = match anchor_slug(inner.as_str(), &mut state) {
                Some(anchor) => anchor,
                None => continue,
            };

            found.insert(
                inner.start(),
                TocEntry::new(tag.clone(), anchor, inner.as_str()),
            );
        }
    }

    log::debug!("Extracted {} TOC entries", found.len());

    found.into_values().collect()
}
