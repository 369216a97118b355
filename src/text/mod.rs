mod accents;
mod summary;
mod typography;

pub use accents::remove_accents;
pub use summary::{extract_excerpt, strip_html_tags, trim_words};
pub use typography::texturize_quotes;
