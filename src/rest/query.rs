//! Search query normalization
//!
//! Free-text query terms are cleaned up before they go on the wire:
//! optional truncation wildcards are attached, runs of asterisks collapse
//! to one, and whitespace is collapsed and trimmed. Total over all string
//! inputs — there is no failure mode here.

use std::sync::OnceLock;

use regex::Regex;

static ASTERISK_RUNS: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUNS: OnceLock<Regex> = OnceLock::new();

fn asterisk_runs() -> &'static Regex {
    ASTERISK_RUNS.get_or_init(|| Regex::new(r"\*+").expect("literal pattern"))
}

fn whitespace_runs() -> &'static Regex {
    WHITESPACE_RUNS.get_or_init(|| Regex::new(r"\s+").expect("literal pattern"))
}

/// Normalize a search query string.
///
/// `left_wildcard` / `right_wildcard` prepend/append an asterisk for
/// left-/right-truncated search before the cleanup passes run.
pub fn normalize_query(query: &str, left_wildcard: bool, right_wildcard: bool) -> String {
    let mut q = String::with_capacity(query.len() + 2);
    if left_wildcard {
        q.push('*');
    }
    q.push_str(query);
    if right_wildcard {
        q.push('*');
    }

    let q = asterisk_runs().replace_all(&q, "*");
    whitespace_runs().replace_all(&q, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_asterisk_runs_and_whitespace() {
        assert_eq!(normalize_query("cat  *  dog", false, false), "cat * dog");
    }

    #[test]
    fn test_truncation_wildcards() {
        assert_eq!(normalize_query("cat", true, true), "*cat*");
        assert_eq!(normalize_query("cat", true, false), "*cat");
        assert_eq!(normalize_query("cat", false, true), "cat*");
    }

    #[test]
    fn test_wildcard_does_not_double_existing_asterisk() {
        assert_eq!(normalize_query("*cat**", true, true), "*cat*");
    }

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize_query("  foo   bar ", false, false), "foo bar");
        assert_eq!(normalize_query("\tfoo\n\nbar", false, false), "foo bar");
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(normalize_query("", false, false), "");
        assert_eq!(normalize_query("   ", false, false), "");
        assert_eq!(normalize_query("", true, true), "*");
    }
}
