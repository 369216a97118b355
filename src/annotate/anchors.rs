use regex::Captures;

use crate::anchor::{anchor_slug, ParseState};
use crate::config::ManualConfig;

/// Prepend an anchor marker element before every configured heading.
///
/// Each tag type is rewritten in one `replace_all` pass so offsets cannot
/// drift within a pass; tag types run in configured order, each pass over
/// the previous pass's output. Slug numbering therefore follows tag
/// configuration order, matching the numbering the TOC parser produces for
/// the same content.
pub(crate) fn add_content_anchors(
    content: &str,
    config: &ManualConfig,
    state: &mut ParseState,
) -> String {
    let mut output = content.to_string();

    for (_, pattern) in config.heading_patterns() {
        output = pattern
            .replace_all(&output, |caps: &Captures| {
                let heading = &caps[0];
                let inner = caps.get(1).map_or("", |m| m.as_str());

                match anchor_slug(inner, state) {
                    Some(slug) => format!(
                        "<a name=\"{0}\" id=\"{0}\" class=\"manual_anchor\">&nbsp;</a>\n{1}",
                        slug, heading
                    ),
                    // Empty heading: no anchor, leave the markup alone
                    None => heading.to_string(),
                }
            })
            .into_owned();
    }

    output
}
