use regex::Captures;

use crate::anchor::ParseState;
use crate::config::ManualConfig;

/// Link inserted before headings and appended at the end of the content
const BACK_TO_TOP_LINK: &str =
    "<a href=\"#manual\" class=\"manual_to_top\">Back to top &uarr;</a>";

/// Prepend a back-to-top link before every configured heading except the
/// first one encountered, then append a final link at the end of the
/// content.
///
/// The counter spans all tag passes, so "first" means first in scan order
/// across the whole invocation, not first per tag type.
pub(crate) fn add_back_to_top_links(
    content: &str,
    config: &ManualConfig,
    state: &mut ParseState,
) -> String {
    let mut output = content.to_string();

    for (_, pattern) in config.heading_patterns() {
        output = pattern
            .replace_all(&output, |caps: &Captures| {
                let heading = &caps[0];
                let first = state.back_to_top_counter == 0;
                state.back_to_top_counter += 1;

                if first {
                    heading.to_string()
                } else {
                    format!("{}\n{}", BACK_TO_TOP_LINK, heading)
                }
            })
            .into_owned();
    }

    output.push_str(&format!("\n{}\n", BACK_TO_TOP_LINK));
    output
}
