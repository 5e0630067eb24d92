//! Configuration constants and validation functions.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{CitationError, Result};

/// Offset between the Buddhist Era (B.E.) and the Gregorian calendar.
pub const ERA_OFFSET: i32 = 543;

/// Bare 4-digit years above this value are read as B.E., otherwise as C.E.
///
/// This is a heuristic: a C.E. year above 2400 or a B.E. year below it
/// would be misclassified. No statute in the corpus is near the boundary.
pub const ERA_YEAR_THRESHOLD: i32 = 2400;

/// Maximum number of characters accepted by the search query builder.
pub const MAX_QUERY_CHARS: usize = 500;

/// Default number of hits returned by a search.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Environment variable naming the seed file used by the CLI.
pub const SEED_ENV_VAR: &str = "LEXTHAI_SEED";

/// Wrap width for search snippets printed by the CLI.
pub const SNIPPET_WRAP_WIDTH: usize = 88;

/// Canonical identifier pattern: lowercase slug (e.g. `pdpa-2562`).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DOCUMENT_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").expect("valid regex"));

/// Validate a canonical document identifier.
///
/// # Examples
/// ```
/// use lexthai_citation::config::validate_document_id;
///
/// assert!(validate_document_id("pdpa-2562").is_ok());
/// assert!(validate_document_id("PDPA 2562").is_err());
/// ```
pub fn validate_document_id(id: &str) -> Result<()> {
    if DOCUMENT_ID_PATTERN.is_match(id) {
        Ok(())
    } else {
        Err(CitationError::InvalidSeed(format!(
            "document id '{id}' is not a lowercase slug (e.g. pdpa-2562)"
        )))
    }
}
