use crate::text::{remove_accents, texturize_quotes};

/// Per-invocation parse state.
///
/// Both counters start at zero and live only for the duration of one
/// extraction or annotation call; slugs are therefore unique within a call
/// but not across calls.
#[derive(Debug, Default)]
pub(crate) struct ParseState {
    /// 0-based counter suffixed onto every anchor slug
    pub anchor_counter: usize,
    /// Counts headings seen by the back-to-top pass; the first heading
    /// overall gets no link
    pub back_to_top_counter: usize,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Derive the anchor slug for a heading's inner text.
///
/// Lower-cases the text, keeps at most its first four words, transliterates
/// accents, normalizes quotes, swaps spaces for underscores, drops literal
/// periods, percent-encodes the result and appends the running counter.
///
/// Empty text yields no slug and leaves the counter untouched.
pub(crate) fn anchor_slug(text: &str, state: &mut ParseState) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let lowered = text.to_lowercase();

    // Limit the anchor text to its first four words. Splitting on single
    // spaces means consecutive spaces produce empty segments that still
    // count as words, matching historically generated slugs.
    let words: Vec<&str> = lowered.split(' ').collect();
    let kept = words.len().min(4);
    let anchor = words[..kept].join(" ");

    let anchor = remove_accents(&anchor);
    let anchor = texturize_quotes(&anchor);
    let anchor = anchor.replace(' ', "_").replace('.', "");
    let encoded = urlencoding::encode(&anchor);

    let slug = format!("{}_{}", encoded, state.anchor_counter);
    state.anchor_counter += 1;

    Some(slug)
}
