use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // Opening anchor tags whose href ends in an image extension
    static ref IMAGE_LINK_REGEX: Regex =
        Regex::new(r#"(?i)<a(.+?)href="(.+?)\.(jpe?g|png|gif)"(.*?)>"#).unwrap();
}

/// Title attribute added alongside the lightbox class
const ZOOM_TITLE: &str = "Click to zoom";

/// Tag image links for the lightbox overlay.
///
/// Injects `class="thickbox"` and a zoom title into the opening tag of every
/// link whose href ends in .jpg, .jpeg, .png or .gif (case-insensitive),
/// preserving the existing attributes. Other links are untouched.
pub(crate) fn tag_image_links(content: &str) -> String {
    IMAGE_LINK_REGEX
        .replace_all(content, |caps: &Captures| {
            let tag = &caps[0];
            let opening = tag.strip_suffix('>').unwrap_or(tag);

            format!(
                "{} class=\"thickbox\" title=\"{}\">",
                opening, ZOOM_TITLE
            )
        })
        .into_owned()
}
