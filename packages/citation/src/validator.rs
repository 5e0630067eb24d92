//! Citation validation against the document store.
//!
//! Checks that a citation names a real document and, when it has a
//! pinpoint, a real provision. Problems are reported as warnings on the
//! [`ValidationResult`]; only store faults are returned as errors.

use crate::calendar::current_era_year;
use crate::citation::parse_citation;
use crate::error::Result;
use crate::store::{DocumentStore, ProvisionLookup, TitleField, YearFilter};
use crate::types::{Document, DocumentStatus, ValidationResult};

/// Warning for blank input.
pub const MISSING_CITATION_WARNING: &str = "Citation text is required";

/// Validate a free-form citation.
///
/// # Examples
/// ```
/// use lexthai_citation::{validate_citation, MemoryStore};
///
/// let store = MemoryStore::new();
/// let result = validate_citation(&store, "garbage text").unwrap();
/// assert!(!result.citation.valid);
/// assert!(!result.document_exists);
/// ```
pub fn validate_citation<S: DocumentStore + ?Sized>(store: &S, text: &str) -> Result<ValidationResult> {
    let citation = parse_citation(text);

    if text.trim().is_empty() {
        return Ok(ValidationResult::not_found(citation).with_warning(MISSING_CITATION_WARNING));
    }

    if !citation.valid {
        let warning = citation.error.clone().unwrap_or_default();
        return Ok(ValidationResult::not_found(citation).with_warning(warning));
    }

    let title = citation.title.clone().unwrap_or_default();
    let year = YearFilter::from_citation(&citation);

    let Some(document) = find_document(store, &title, year)? else {
        let warning = match citation.era_year {
            Some(era) => format!("Document not found: {title} B.E. {era}"),
            None => format!("Document not found: {title}"),
        };
        tracing::debug!(title = %title, "Cited document not found");
        return Ok(ValidationResult::not_found(citation).with_warning(warning));
    };

    let mut result = ValidationResult::not_found(citation);
    result.document_exists = true;
    result.document_id = Some(document.id.clone());
    result.document_title = Some(document.title_en.clone());
    result.status = Some(document.status);

    if document.status == DocumentStatus::Repealed {
        result
            .warnings
            .push(format!("{} has been repealed", document.title_en));
    }

    if let Some(era) = result.citation.era_year {
        let current = current_era_year();
        if era > current {
            result.warnings.push(format!(
                "Cited year B.E. {era} is later than the current year B.E. {current}"
            ));
        }
    }

    if let Some(lookup) = ProvisionLookup::from_citation(&result.citation) {
        result.provision_exists = store.provision_exists(&document.id, &lookup)?;
        if !result.provision_exists {
            result.warnings.push(format!(
                "Section {} not found in {}",
                lookup.reference, document.title_en
            ));
        }
    }

    Ok(result)
}

/// Title lookup across all title fields, then the title as an identifier.
fn find_document<S: DocumentStore + ?Sized>(
    store: &S,
    title: &str,
    year: Option<YearFilter>,
) -> Result<Option<Document>> {
    if let Some(document) = store.find_by_title(title, &TitleField::ALL, year)? {
        return Ok(Some(document));
    }

    let by_id = store
        .find_by_id(title)?
        .filter(|document| year.map_or(true, |filter| filter.matches(document)));
    Ok(by_id)
}
