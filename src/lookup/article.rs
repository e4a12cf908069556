//! Article keys and the article link filter

/// Base prepended to article paths to form search keys (mobile site)
pub const ARTICLE_BASE_URL: &str = "https://en.m.wikipedia.org";

/// Base used for the existence check
pub const EXISTENCE_BASE_URL: &str = "https://en.wikipedia.org";

const WIKI_PREFIX: &str = "/wiki/";

/// Prefixes of links that are not articles.
///
/// Deliberately liberal: ISBN/ISSN and coordinate pages are linked from
/// nearly everywhere and would make most races trivial.
const EXCLUDED_PREFIXES: [&str; 9] = [
    "/wiki/File",
    "/wiki/Geographic_coordinate_system",
    "/wiki/Help",
    "/wiki/ISBN_",
    "/wiki/ISSN_",
    "/wiki/Main_Page",
    "/wiki/Special",
    "/wiki/Wayback_Machine",
    "/wiki/Wikipedia:",
];

/// Replace spaces with the wiki word separator
fn title_path(title: &str) -> String {
    format!("{}{}", WIKI_PREFIX, title.replace(' ', "_"))
}

/// Build the search key for an article title
pub fn key_from_title(title: &str) -> String {
    key_from_title_with_base(ARTICLE_BASE_URL, title)
}

/// Build a search key against a custom article base
pub fn key_from_title_with_base(base: &str, title: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), title_path(title))
}

/// Build the URL checked to decide whether a title exists
pub fn existence_url_for_title(title: &str) -> String {
    existence_url_with_base(EXISTENCE_BASE_URL, title)
}

pub fn existence_url_with_base(base: &str, title: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), title_path(title))
}

/// Recover a readable title from a key (`.../wiki/Peter_Jenkins` → `Peter Jenkins`)
pub fn title_from_key(key: &str) -> String {
    let path = match key.find(WIKI_PREFIX) {
        Some(pos) => &key[pos + WIKI_PREFIX.len()..],
        None => key,
    };
    path.replace('_', " ")
}

/// Whether an href starts with a prefix of a non-article page
pub fn contains_excluded_prefix(href: &str) -> bool {
    EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Whether an href points at an article
pub fn is_wiki_article(href: &str) -> bool {
    href.starts_with(WIKI_PREFIX) && !contains_excluded_prefix(href)
}
