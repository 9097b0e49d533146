//! String helpers shared by the router crates.
//!
//! Everything here is target independent so it can be tested natively and
//! reused by the wasm client and the dev server alike.

/// A location string split into its path, query and fragment.
///
/// `query` and `hash` exclude their leading `?` / `#`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationParts<'a> {
    /// Path portion, always starting with `/`
    pub path: &'a str,
    /// Raw query string, if any
    pub query: Option<&'a str>,
    /// Raw fragment, if any
    pub hash: Option<&'a str>,
}

/// Split `/champion/42?tab=skins#lore` into path, query and fragment.
///
/// An empty path is reported as `/`.
pub fn split_location(location: &str) -> LocationParts<'_> {
    let (rest, hash) = match location.split_once('#') {
        Some((rest, hash)) => (rest, Some(hash)),
        None => (location, None),
    };

    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    LocationParts {
        path: if path.is_empty() { "/" } else { path },
        query,
        hash,
    }
}

/// Normalise a base prefix to the form `/segment/...` without a trailing slash.
///
/// The root base (`""`, `"/"`) normalises to an empty string so it can be
/// prepended to route paths directly.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');

    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Remove a normalised base prefix from a browser pathname.
///
/// The prefix is only stripped on a segment boundary, so `/app` does not
/// strip anything from `/application`. Pathnames outside the base are
/// returned unchanged.
pub fn strip_base<'a>(base: &str, pathname: &'a str) -> &'a str {
    if base.is_empty() {
        return pathname;
    }

    match pathname.strip_prefix(base) {
        Some("") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_location() {
        assert_eq!(
            split_location("/champion/42?tab=skins#lore"),
            LocationParts {
                path: "/champion/42",
                query: Some("tab=skins"),
                hash: Some("lore"),
            }
        );

        // Query marker inside the fragment belongs to the fragment
        assert_eq!(
            split_location("/#/champion/1?x=1"),
            LocationParts {
                path: "/",
                query: None,
                hash: Some("/champion/1?x=1"),
            }
        );

        assert_eq!(split_location("").path, "/");
        assert_eq!(split_location("?q=1").path, "/");
        assert_eq!(split_location("?q=1").query, Some("q=1"));
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base(" /nested/app// "), "/nested/app");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("", "/champion/1"), "/champion/1");
        assert_eq!(strip_base("/app", "/app/champion/1"), "/champion/1");
        assert_eq!(strip_base("/app", "/app"), "/");
        assert_eq!(strip_base("/app", "/app/"), "/");
        assert_eq!(strip_base("/app", "/application"), "/application");
        assert_eq!(strip_base("/app", "/other"), "/other");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Kai'Sa" & co</b>"#),
            "&lt;b&gt;&quot;Kai&#39;Sa&quot; &amp; co&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }
}
