//! Route templating and URL assembly
//!
//! A route template is substituted into a concrete relative path, split
//! into hierarchy segments, and joined onto the REST API base URL with
//! each segment percent-escaped. Empty segments are kept: `{vocid}/`
//! and `{vocid}/index/` rely on the trailing slash.

/// Replace `{name}` placeholder occurrences in a route template.
///
/// Unmatched placeholders are left as literal text; supplying every
/// placeholder is the caller's contract, pinned by the registry tests
/// rather than checked at runtime.
pub fn substitute(route: &str, substitutions: &[(&str, &str)]) -> String {
    let mut substituted = route.to_string();
    for (name, value) in substitutions {
        substituted = substituted.replace(&format!("{{{name}}}"), value);
    }
    substituted
}

/// Split a substituted route into its hierarchy segments.
///
/// A trailing slash yields a trailing empty segment, which `build_url`
/// turns back into a trailing slash.
pub fn route_segments(route: &str) -> Vec<&str> {
    route.split('/').collect()
}

/// Join the base URL and hierarchy segments into a request URL.
///
/// Each segment is percent-escaped before joining. A trailing slash on
/// `base` is dropped so the segment separator is never doubled.
pub fn build_url(base: &str, segments: &[&str]) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}
