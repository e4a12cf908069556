//! Anchor extraction from fetched article HTML
//!
//! Only the `href` attribute of `<a>` elements matters to the race, so a
//! small tag scanner is enough; no DOM is built.

/// Extract the `href` of every `<a>` element in document order.
///
/// Anchors without an `href` are skipped. `&amp;` entities are decoded.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let mut hrefs = Vec::new();
    let mut rest = html;

    while let Some(open) = rest.find('<') {
        rest = &rest[open + 1..];
        let close = match tag_end(rest) {
            Some(close) => close,
            None => break,
        };
        let tag = &rest[..close];
        rest = &rest[close + 1..];

        if !is_anchor_tag(tag) {
            continue;
        }
        if let Some(href) = attribute_value(tag, "href") {
            hrefs.push(href.replace("&amp;", "&"));
        }
    }

    hrefs
}

/// Offset of the `>` closing a tag, skipping any inside quoted values
fn tag_end(rest: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (None, _) => {}
        }
    }
    None
}

/// Whether a tag body (text between `<` and `>`) opens an `<a>` element
fn is_anchor_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    matches!(chars.next(), Some('a') | Some('A'))
        && matches!(chars.next(), Some(c) if c.is_ascii_whitespace())
}

/// Find a quoted or bare attribute value inside a tag body
fn attribute_value<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let bytes = tag.as_bytes();
    let mut search_from = 0;

    while let Some(found) = find_ignore_case(&tag[search_from..], name) {
        let start = search_from + found;
        search_from = start + name.len();

        // Must be a whole attribute name, preceded by whitespace
        let preceded_by_space = start > 0 && bytes[start - 1].is_ascii_whitespace();
        if !preceded_by_space {
            continue;
        }

        let after = tag[search_from..].trim_start();
        let Some(after_eq) = after.strip_prefix('=') else {
            continue;
        };
        let value = after_eq.trim_start();

        return match value.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let body = &value[1..];
                body.find(quote).map(|end| &body[..end])
            }
            Some(_) => {
                let end = value
                    .find(|c: char| c.is_ascii_whitespace())
                    .unwrap_or(value.len());
                Some(&value[..end])
            }
            None => None,
        };
    }

    None
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}
