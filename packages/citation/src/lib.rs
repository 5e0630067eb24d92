//! LexThai Citation - Parse, format, validate and resolve Thai statute citations.
//!
//! This crate is the citation and resolution core of a legal-research
//! service over a bilingual (Thai/English) corpus of Thai statutes.
//!
//! # Example
//!
//! ```
//! use lexthai_citation::{format_citation, parse_citation, CitationFormat};
//!
//! let citation = parse_citation("s. 3, PDPA 2019");
//! assert_eq!(citation.era_year, Some(2562));
//! assert_eq!(
//!     format_citation(&citation, CitationFormat::FullTh),
//!     "มาตรา 3 Personal Data Protection Act พ.ศ. 2562"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`calendar`]: B.E./C.E. year conversion
//! - [`citation`]: citation grammar, formatter and abbreviation tables
//! - [`resolver`]: staged statute identifier lookup
//! - [`validator`]: existence check of cited documents and provisions
//! - [`search`]: full-text query building with fallback
//! - [`store`]: store and text index traits, plus an in-memory store
//! - [`types`]: shared data types
//! - [`config`]: constants and validation
//! - [`error`]: error types and Result alias
//! - [`cli`]: command-line interface

pub mod calendar;
pub mod citation;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolver;
pub mod search;
pub mod store;
pub mod types;
pub mod validator;

// Re-export the public operations
pub use citation::{format_citation, parse_citation, CitationFormat};
pub use resolver::{require_statute_id, resolve_statute_id};
pub use search::{build_search_query, search_with_fallback, SearchOutcome};
pub use validator::validate_citation;

// Re-export commonly used items
pub use error::{CitationError, Result};
pub use store::{DocumentStore, MemoryStore, TextIndex};
pub use types::{
    CitationKind, Document, DocumentStatus, Provision, QueryMode, SearchHit, SearchQueryVariants,
    StructuredCitation, ValidationResult,
};
