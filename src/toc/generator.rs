use crate::toc::TocEntry;

/// Render stored TOC entries as an HTML definition list linking into the
/// page at `permalink`.
///
/// Titles are HTML-escaped; the entry tag ends up in the item class so
/// stylesheets can indent by heading level. An empty entry list renders
/// nothing, which lets callers suppress the whole TOC block.
pub fn render_toc_list(entries: &[TocEntry], permalink: &str) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html = String::from("<dl class=\"manual-page-toc\">");

    for entry in entries {
        let title = html_escape::encode_text(&entry.title);

        html.push_str(&format!(
            "<dt class=\"manual-toc-element dt-{}\"><a href=\"{}#{}\" title=\"{}\">{}</a></dt>",
            entry.tag, permalink, entry.anchor, title, title
        ));
    }

    html.push_str("</dl>");
    html
}
