mod generator;
mod parser;

pub use generator::render_toc_list;
pub use parser::extract_toc;

use serde::{Deserialize, Serialize};

/// A single table-of-contents record for a manual page
///
/// Hosts persist these keyed by the owning page and rebuild them on every
/// save; the serialized shape uses `type` for the tag field, matching the
/// records stored by earlier versions of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading tag name, e.g. "h2"
    #[serde(rename = "type")]
    pub tag: String,
    /// Anchor slug the entry links to
    pub anchor: String,
    /// Raw heading inner text
    pub title: String,
}

impl TocEntry {
    pub fn new<T, A, S>(tag: T, anchor: A, title: S) -> Self
    where
        T: Into<String>,
        A: Into<String>,
        S: Into<String>,
    {
        TocEntry {
            tag: tag.into(),
            anchor: anchor.into(),
            title: title.into(),
        }
    }
}
