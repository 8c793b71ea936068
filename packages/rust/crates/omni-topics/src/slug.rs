//! Canonical topic keys derived from free-text titles.
//!
//! A key is lowercase ASCII alphanumerics joined by single hyphens
//! (`^[a-z0-9]+(-[a-z0-9]+)*$`), or the empty string when the title has no
//! usable characters at all.

use regex::Regex;
use std::sync::LazyLock;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"[^a-z0-9\s-]"));
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"\s+"));
static HYPHEN_RUN: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"-+"));
static EDGE_HYPHEN: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"^-|-$"));

/// Derive the canonical key for a title.
///
/// The steps run in a fixed order: lowercase, drop everything except
/// `[a-z0-9]`, whitespace and `-`, turn whitespace runs into `-`, collapse
/// hyphen runs, strip an edge hyphen, trim.
///
/// ```rust
/// use omni_topics::slugify;
///
/// assert_eq!(slugify("var vs. let vs. const"), "var-vs-let-vs-const");
/// assert_eq!(slugify("useState"), "usestate");
/// assert_eq!(slugify("!!!"), "");
/// ```
#[must_use]
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let kept = DISALLOWED_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&kept, "-");
    let collapsed = HYPHEN_RUN.replace_all(&hyphenated, "-");
    let trimmed = EDGE_HYPHEN.replace_all(&collapsed, "");
    trimmed.trim().to_string()
}

/// Whether `key` already has canonical form (empty keys excluded).
#[must_use]
pub fn is_canonical_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('-')
        && !key.ends_with('-')
        && !key.contains("--")
        && key
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}
