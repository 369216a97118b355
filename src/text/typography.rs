/// Convert straight quotes to their typographic equivalents.
///
/// This is the quote subset of classic CMS "texturize" filters, which is the
/// only part that can affect anchor text: apostrophes and closing quotes
/// become U+2019, opening quotes become U+2018 / U+201C depending on
/// position.
pub fn texturize_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();

        match c {
            '\'' => {
                if prev.map_or(false, |p| p.is_alphanumeric()) {
                    // Apostrophe inside a word, or a closing quote
                    out.push('\u{2019}');
                } else if next.map_or(false, |n| n.is_ascii_digit()) {
                    // Abbreviated year: '99
                    out.push('\u{2019}');
                } else if next.map_or(false, |n| n.is_alphanumeric()) {
                    out.push('\u{2018}');
                } else {
                    out.push('\u{2019}');
                }
            }
            '"' => {
                let opening =
                    prev.map_or(true, |p| p.is_whitespace() || matches!(p, '(' | '[' | '{'));
                out.push(if opening { '\u{201C}' } else { '\u{201D}' });
            }
            _ => out.push(c),
        }
    }

    out
}
