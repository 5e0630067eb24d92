//! Search query building.
//!
//! Raw user text is never passed to the text index as-is. Input that
//! already uses index syntax (quotes, `AND`/`OR`/`NOT`, trailing `*`) is
//! repaired and passed through; anything else is treated as keywords and
//! rewritten into a precise phrase-prefix query plus a looser `OR`
//! fallback.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::config::MAX_QUERY_CHARS;
use crate::error::Result;
use crate::store::TextIndex;
use crate::types::{QueryMode, SearchHit, SearchQueryVariants};

/// A query that is valid syntax and matches nothing.
pub const EMPTY_QUERY: &str = "\"\"";

/// Quote characters, straight and typographic.
const QUOTES: &[char] = &['"', '“', '”', '„', '‟', '«', '»'];

/// Sequences with no meaning in a search expression.
const STRIPPED_SEQUENCES: &[&str] = &["/*", "*/", "--", ";"];

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static BOOLEAN_OPERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:AND|OR|NOT)\b").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TRAILING_WILDCARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S\*(?:\s|$)").expect("valid regex"));

/// Everything except letters (with combining marks, for Thai), digits, `-`, `_`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static NON_TOKEN_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{N}_\-]").expect("valid regex"));

fn is_explicit_syntax(text: &str) -> bool {
    text.contains(QUOTES) || BOOLEAN_OPERATOR.is_match(text) || TRAILING_WILDCARD.is_match(text)
}

fn normalize_explicit(text: &str) -> String {
    let mut query: String = text
        .chars()
        .map(|c| if QUOTES.contains(&c) { '"' } else { c })
        .collect();

    for sequence in STRIPPED_SEQUENCES {
        query = query.replace(sequence, "");
    }

    let mut query = query.trim().to_string();
    if query.matches('"').count() % 2 == 1 {
        query.push('"');
    }
    query
}

fn empty_query() -> SearchQueryVariants {
    SearchQueryVariants {
        mode: QueryMode::Empty,
        primary: EMPTY_QUERY.to_string(),
        fallback: None,
    }
}

/// Build the query variants for raw search text.
///
/// # Examples
/// ```
/// use lexthai_citation::build_search_query;
///
/// let variants = build_search_query("personal data");
/// assert_eq!(variants.primary, r#""personal"* "data"*"#);
/// assert_eq!(variants.fallback.as_deref(), Some("personal* OR data*"));
/// ```
#[must_use]
pub fn build_search_query(text: &str) -> SearchQueryVariants {
    let capped: String = text.trim().chars().take(MAX_QUERY_CHARS).collect();
    let text = capped.trim();
    if text.is_empty() {
        return empty_query();
    }

    if is_explicit_syntax(text) {
        let primary = normalize_explicit(text);
        if primary.is_empty() {
            return empty_query();
        }
        return SearchQueryVariants {
            mode: QueryMode::Explicit,
            primary,
            fallback: None,
        };
    }

    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|token| NON_TOKEN_CHARS.replace_all(token, "").into_owned())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return empty_query();
    }

    let primary = tokens
        .iter()
        .map(|t| format!("\"{t}\"*"))
        .collect::<Vec<_>>()
        .join(" ");
    let fallback = tokens
        .iter()
        .map(|t| {
            if t.contains('-') {
                format!("\"{t}\"*")
            } else {
                format!("{t}*")
            }
        })
        .collect::<Vec<_>>()
        .join(" OR ");

    SearchQueryVariants {
        mode: QueryMode::Natural,
        primary,
        fallback: Some(fallback),
    }
}

/// Result of a search that may have fallen back to the looser query.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub variants: SearchQueryVariants,
    pub hits: Vec<SearchHit>,
    /// The fallback query produced `hits`.
    pub used_fallback: bool,
}

/// Search with the primary query, then the fallback if nothing matched.
pub fn search_with_fallback<I: TextIndex + ?Sized>(
    index: &I,
    text: &str,
    limit: usize,
) -> Result<SearchOutcome> {
    let variants = build_search_query(text);
    let hits = index.search(&variants.primary, limit)?;

    if hits.is_empty() {
        if let Some(fallback) = &variants.fallback {
            tracing::debug!(primary = %variants.primary, fallback = %fallback, "Primary query had no hits");
            let hits = index.search(fallback, limit)?;
            return Ok(SearchOutcome {
                variants,
                hits,
                used_fallback: true,
            });
        }
    }

    Ok(SearchOutcome {
        variants,
        hits,
        used_fallback: false,
    })
}
