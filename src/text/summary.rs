use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Default word count for manual page excerpts
const EXCERPT_LENGTH: usize = 55;

/// Strip HTML tags from text
pub fn strip_html_tags(text: &str) -> String {
    TAG_REGEX.replace_all(text, "").trim().to_string()
}

/// Trim text to at most `num_words` words, appending `more` when truncated
pub fn trim_words(text: &str, num_words: usize, more: &str) -> String {
    let plain = strip_html_tags(text);
    let words: Vec<&str> = plain.split_whitespace().collect();

    if words.len() <= num_words {
        return words.join(" ");
    }

    let mut out = words[..num_words].join(" ");
    out.push_str(more);
    out
}

/// Plain-text excerpt of manual page content, for listings next to the TOC
pub fn extract_excerpt(content: &str) -> String {
    trim_words(content, EXCERPT_LENGTH, " [&hellip;]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(
            strip_html_tags("<p>Some <em>rich</em> text</p>"),
            "Some rich text"
        );
    }

    #[test]
    fn test_trim_words_short_text() {
        assert_eq!(trim_words("one two three", 5, "..."), "one two three");
    }

    #[test]
    fn test_trim_words_truncates() {
        assert_eq!(trim_words("one two three four", 2, "..."), "one two...");
    }

    #[test]
    fn test_extract_excerpt_appends_ellipsis() {
        let content = (0..60)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let excerpt = extract_excerpt(&content);

        assert!(excerpt.ends_with(" [&hellip;]"));
        assert!(excerpt.starts_with("word0 "));
    }
}
