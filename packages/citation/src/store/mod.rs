//! Read-only document store and text index interfaces.
//!
//! The resolver and validator only see these traits. The production
//! store (a relational database with a full-text index) lives outside
//! this crate; [`MemoryStore`] implements both traits over a YAML seed
//! file for the CLI and for tests.
//!
//! Implementations report their own failures as
//! [`CitationError::Store`](crate::error::CitationError::Store); callers
//! propagate them unchanged.

pub mod memory;
pub mod query;

pub use memory::MemoryStore;

use crate::error::Result;
use crate::types::{Document, Provision, SearchHit, StructuredCitation};

/// Title fields a substring lookup may scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    Thai,
    English,
    ShortName,
}

impl TitleField {
    /// Every title field, in scan order.
    pub const ALL: [Self; 3] = [Self::Thai, Self::English, Self::ShortName];

    /// Get this field's value on a document.
    #[must_use]
    pub fn value<'a>(&self, document: &'a Document) -> Option<&'a str> {
        match self {
            Self::Thai => Some(&document.title_th),
            Self::English => Some(&document.title_en),
            Self::ShortName => document.short_name.as_deref(),
        }
    }
}

/// Year constraint on a document lookup.
///
/// A document passes when either its B.E. or its C.E. year equals the
/// corresponding cited year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearFilter {
    pub era_year: Option<i32>,
    pub western_year: Option<i32>,
}

impl YearFilter {
    /// Build a filter from a citation, or `None` if it carries no year.
    #[must_use]
    pub fn from_citation(citation: &StructuredCitation) -> Option<Self> {
        if citation.era_year.is_none() && citation.western_year.is_none() {
            return None;
        }
        Some(Self {
            era_year: citation.era_year,
            western_year: citation.western_year,
        })
    }

    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        let era = self.era_year.is_some() && self.era_year == document.era_year;
        let western = self.western_year.is_some() && self.western_year == document.western_year;
        era || western
    }
}

/// How to look up a cited provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionLookup {
    /// Canonical pinpoint, e.g. `3(1)`.
    pub reference: String,

    /// Bare section, e.g. `3`.
    pub section: String,

    /// Accept stored references that extend the section with an
    /// unspecified subsection (`3` matches a stored `3(2)`). Only set when
    /// the citation names no subsection or paragraph.
    pub allow_prefix: bool,
}

impl ProvisionLookup {
    /// Build a lookup from a citation, or `None` if it has no section.
    #[must_use]
    pub fn from_citation(citation: &StructuredCitation) -> Option<Self> {
        Some(Self {
            reference: citation.pinpoint()?,
            section: citation.section.clone()?,
            allow_prefix: !citation.has_sub_pinpoint(),
        })
    }

    /// Whether a stored provision satisfies this lookup.
    #[must_use]
    pub fn matches(&self, provision: &Provision) -> bool {
        if provision.reference == self.reference || provision.section == self.reference {
            return true;
        }
        self.allow_prefix
            && provision
                .reference
                .strip_prefix(self.section.as_str())
                .is_some_and(|rest| rest.starts_with('('))
    }
}

/// Read-only access to documents and provisions.
pub trait DocumentStore {
    /// Exact lookup by canonical identifier.
    fn find_by_id(&self, id: &str) -> Result<Option<Document>>;

    /// First document whose selected title fields contain `needle`
    /// (case-insensitive), optionally constrained by year.
    fn find_by_title(
        &self,
        needle: &str,
        fields: &[TitleField],
        year: Option<YearFilter>,
    ) -> Result<Option<Document>>;

    /// Whether the document has a provision satisfying `lookup`.
    fn provision_exists(&self, document_id: &str, lookup: &ProvisionLookup) -> Result<bool>;
}

/// Full-text index over provision text.
pub trait TextIndex {
    /// Run a query in the index's syntax, returning at most `limit` hits.
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>>;
}
