//! Core data types for citations, documents and search.
//!
//! All of these are per-request value objects: built once by an
//! operation and handed back to the caller.

use serde::{Deserialize, Serialize};

use crate::calendar::{to_era, to_western};

/// Kind of legal instrument a citation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    /// Act of parliament or code (พระราชบัญญัติ, ประมวลกฎหมาย).
    Statute,

    /// Royal decree (พระราชกฤษฎีกา).
    RoyalDecree,

    /// Input did not match any grammar.
    Unknown,
}

impl CitationKind {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Statute => "statute",
            Self::RoyalDecree => "royal_decree",
            Self::Unknown => "unknown",
        }
    }

    /// Classify a parsed title.
    #[must_use]
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("royal decree")
            || title.contains("พระราชกฤษฎีกา")
            || title.contains("พ.ร.ฎ.")
        {
            Self::RoyalDecree
        } else {
            Self::Statute
        }
    }
}

/// A citation broken into its structural parts.
///
/// When `valid` is false, only `error` is set. When `valid` is true,
/// `section` is absent only for document-level citations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCitation {
    pub valid: bool,
    pub kind: CitationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    /// Year in B.E.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub era_year: Option<i32>,
    /// Year in C.E.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub western_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StructuredCitation {
    /// Create an invalid citation carrying only a diagnostic.
    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            kind: CitationKind::Unknown,
            title: None,
            abbreviation: None,
            era_year: None,
            western_year: None,
            section: None,
            subsection: None,
            paragraph: None,
            error: Some(error.into()),
        }
    }

    /// Create a valid citation for a title, with no year or pinpoint yet.
    #[must_use]
    pub fn for_title(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            valid: true,
            kind: CitationKind::from_title(&title),
            title: Some(title),
            abbreviation: None,
            era_year: None,
            western_year: None,
            section: None,
            subsection: None,
            paragraph: None,
            error: None,
        }
    }

    /// Set both years from a B.E. year.
    #[must_use]
    pub fn with_era_year(mut self, era_year: i32) -> Self {
        self.era_year = Some(era_year);
        self.western_year = Some(to_western(era_year));
        self
    }

    /// Set both years from a C.E. year.
    #[must_use]
    pub fn with_western_year(mut self, western_year: i32) -> Self {
        self.western_year = Some(western_year);
        self.era_year = Some(to_era(western_year));
        self
    }

    /// Render the pinpoint as `N(sub)(para)`, if a section is present.
    #[must_use]
    pub fn pinpoint(&self) -> Option<String> {
        let section = self.section.as_deref()?;
        let mut pin = section.to_string();
        if let Some(sub) = &self.subsection {
            pin.push_str(&format!("({sub})"));
        }
        if let Some(para) = &self.paragraph {
            pin.push_str(&format!("({para})"));
        }
        Some(pin)
    }

    /// Whether the citation narrows below section level.
    #[must_use]
    pub fn has_sub_pinpoint(&self) -> bool {
        self.subsection.is_some() || self.paragraph.is_some()
    }
}

/// Legal status of a document in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Active,
    Amended,
    Repealed,
}

impl DocumentStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Amended => "amended",
            Self::Repealed => "repealed",
        }
    }
}

/// Document metadata as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Canonical identifier (e.g. "pdpa-2562").
    pub id: String,

    /// Official Thai title.
    pub title_th: String,

    /// English title.
    pub title_en: String,

    /// Short name or abbreviation (e.g. "PDPA").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    pub status: DocumentStatus,

    /// Enactment year in B.E.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era_year: Option<i32>,

    /// Enactment year in C.E.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub western_year: Option<i32>,
}

/// A single provision (section) of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provision {
    /// Identifier of the owning document.
    pub document_id: String,

    /// Bare section number (e.g. "3").
    pub section: String,

    /// Canonical provision reference (e.g. "3(1)").
    pub reference: String,

    /// Provision text.
    pub text: String,
}

/// Outcome of validating a citation against the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub citation: StructuredCitation,
    pub document_exists: bool,
    /// Only true when the document exists and the cited section was found.
    pub provision_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// A result with nothing found, for the given citation.
    #[must_use]
    pub fn not_found(citation: StructuredCitation) -> Self {
        Self {
            citation,
            document_exists: false,
            provision_exists: false,
            document_id: None,
            document_title: None,
            status: None,
            warnings: Vec::new(),
        }
    }

    /// Add a warning, returning self.
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Overall verdict: parsed, document found, and the cited section found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.citation.valid
            && self.document_exists
            && (self.citation.section.is_none() || self.provision_exists)
    }
}

/// How the search input was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// User wrote index syntax (quotes, boolean operators, wildcards).
    Explicit,

    /// Plain keywords, rewritten into phrase-prefix terms.
    Natural,

    /// Nothing searchable; the query matches no rows.
    Empty,
}

/// Query expressions produced by the search query builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQueryVariants {
    pub mode: QueryMode,

    /// Precise expression, always tried first.
    pub primary: String,

    /// Looser expression, tried only when `primary` has no hits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// A single full-text search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub document_id: String,
    pub reference: String,
    pub snippet: String,
}
