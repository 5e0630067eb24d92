//! Citation parsing and formatting.
//!
//! - [`parser`]: ordered grammar turning free text into a [`StructuredCitation`]
//! - [`formatter`]: canonical rendering back to text
//! - [`abbreviations`]: abbreviation and Thai short-title tables
//!
//! [`StructuredCitation`]: crate::types::StructuredCitation

pub mod abbreviations;
pub mod formatter;
pub mod parser;

pub use formatter::{format_citation, CitationFormat};
pub use parser::parse_citation;
