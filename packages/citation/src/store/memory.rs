//! In-memory document store loaded from a YAML seed file.
//!
//! # Seed format
//!
//! ```yaml
//! documents:
//!   - id: pdpa-2562
//!     title_th: พระราชบัญญัติคุ้มครองข้อมูลส่วนบุคคล
//!     title_en: Personal Data Protection Act
//!     short_name: PDPA
//!     status: active
//!     era_year: 2562            # western_year is derived when omitted
//!     provisions:
//!       - section: "3"
//!         text: ...
//!       - section: "26"
//!         reference: "26(1)"    # defaults to the section
//!         text: ...
//! ```
//!
//! Documents keep seed order, so "first hit" lookups are deterministic.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use crate::calendar::{to_era, to_western};
use crate::config::validate_document_id;
use crate::error::{CitationError, Result};
use crate::store::query::{normalize_text, parse_query};
use crate::store::{DocumentStore, ProvisionLookup, TextIndex, TitleField, YearFilter};
use crate::types::{Document, Provision, SearchHit};

/// Maximum snippet length in characters.
const SNIPPET_CHARS: usize = 160;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    documents: Vec<SeedDocument>,
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(flatten)]
    document: Document,
    #[serde(default)]
    provisions: Vec<SeedProvision>,
}

#[derive(Debug, Deserialize)]
struct SeedProvision {
    section: String,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    text: String,
}

/// Document store held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Vec<Document>,
    provisions: Vec<Provision>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from YAML seed text.
    ///
    /// # Errors
    /// `Yaml` for malformed YAML, `InvalidSeed` for bad identifiers,
    /// duplicate documents, or B.E./C.E. years that disagree.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let seed: SeedFile = serde_yaml_ng::from_str(yaml)?;
        let mut store = Self::new();
        let mut seen = HashSet::new();

        for entry in seed.documents {
            let document = complete_years(entry.document)?;
            validate_document_id(&document.id)?;
            if !seen.insert(document.id.clone()) {
                return Err(CitationError::InvalidSeed(format!(
                    "duplicate document id '{}'",
                    document.id
                )));
            }

            for provision in entry.provisions {
                let reference = provision
                    .reference
                    .unwrap_or_else(|| provision.section.clone());
                store.provisions.push(Provision {
                    document_id: document.id.clone(),
                    section: provision.section,
                    reference,
                    text: provision.text,
                });
            }
            store.documents.push(document);
        }

        tracing::debug!(
            documents = store.documents.len(),
            provisions = store.provisions.len(),
            "Loaded seed data"
        );
        Ok(store)
    }

    /// Load a store from a YAML seed file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Add a document, returning self.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add a provision, returning self.
    #[must_use]
    pub fn with_provision(mut self, provision: Provision) -> Self {
        self.provisions.push(provision);
        self
    }

    /// Provisions of one document, in seed order.
    pub fn provisions_of<'a>(&'a self, document_id: &'a str) -> impl Iterator<Item = &'a Provision> {
        self.provisions
            .iter()
            .filter(move |p| p.document_id == document_id)
    }

    /// First provision of a document satisfying `lookup`.
    #[must_use]
    pub fn find_provision<'a>(
        &'a self,
        document_id: &'a str,
        lookup: &ProvisionLookup,
    ) -> Option<&'a Provision> {
        self.provisions_of(document_id).find(|p| lookup.matches(p))
    }
}

/// Fill in whichever year is missing, and reject mismatched pairs.
fn complete_years(mut document: Document) -> Result<Document> {
    match (document.era_year, document.western_year) {
        (Some(era), None) => document.western_year = Some(to_western(era)),
        (None, Some(western)) => document.era_year = Some(to_era(western)),
        (Some(era), Some(western)) if to_western(era) != western => {
            return Err(CitationError::InvalidSeed(format!(
                "document '{}' has B.E. {era} but C.E. {western}",
                document.id
            )));
        }
        _ => {}
    }
    Ok(document)
}

fn snippet(text: &str) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= SNIPPET_CHARS {
        return text;
    }
    let cut: String = text.chars().take(SNIPPET_CHARS).collect();
    format!("{}…", cut.trim_end())
}

impl DocumentStore for MemoryStore {
    fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
        Ok(self.documents.iter().find(|d| d.id == id).cloned())
    }

    fn find_by_title(
        &self,
        needle: &str,
        fields: &[TitleField],
        year: Option<YearFilter>,
    ) -> Result<Option<Document>> {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let hit = self.documents.iter().find(|document| {
            let title_match = fields.iter().any(|field| {
                field
                    .value(document)
                    .is_some_and(|value| value.to_lowercase().contains(&needle))
            });
            title_match && year.map_or(true, |filter| filter.matches(document))
        });
        Ok(hit.cloned())
    }

    fn provision_exists(&self, document_id: &str, lookup: &ProvisionLookup) -> Result<bool> {
        Ok(self.find_provision(document_id, lookup).is_some())
    }
}

impl TextIndex for MemoryStore {
    fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let parsed = parse_query(query);
        let hits = self
            .provisions
            .iter()
            .filter(|p| parsed.matches(&normalize_text(&p.text)))
            .take(limit)
            .map(|p| SearchHit {
                document_id: p.document_id.clone(),
                reference: p.reference.clone(),
                snippet: snippet(&p.text),
            })
            .collect();
        Ok(hits)
    }
}
