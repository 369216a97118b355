use log::warn;

use crate::config::types::is_tag_name;
use crate::config::ManualConfig;
use crate::utils::error::{BoxResult, ManualError};

/// Validate the configuration
///
/// Extraction itself never fails on bad configuration (invalid tags are
/// skipped with a warning); hosts that want to reject a configuration at
/// load time call this instead.
pub fn validate_config(config: &ManualConfig) -> BoxResult<()> {
    if config.heading_tags.is_empty() {
        return Err(ManualError::Config(
            "No heading tags configured: extraction would never match anything".to_string(),
        )
        .into());
    }

    let invalid: Vec<&str> = config
        .heading_tags
        .iter()
        .filter(|tag| !is_tag_name(tag))
        .map(|tag| tag.as_str())
        .collect();

    if !invalid.is_empty() {
        return Err(ManualError::Config(format!(
            "Invalid heading tag names: {}",
            invalid.join(", ")
        ))
        .into());
    }

    // Duplicate tags are tolerated but almost certainly a mistake
    for (i, tag) in config.heading_tags.iter().enumerate() {
        if config.heading_tags[..i].contains(tag) {
            warn!("Heading tag {:?} is configured more than once", tag);
        }
    }

    Ok(())
}
