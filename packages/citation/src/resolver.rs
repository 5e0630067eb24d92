//! Statute identifier resolution.
//!
//! Maps whatever the user typed (canonical id, Thai or English title
//! fragment, short name) to the canonical identifier of one document.
//! Stages run in order and stop at the first hit:
//!
//! 1. exact canonical identifier
//! 2. substring of the Thai or English title
//! 3. substring of the short name

use crate::error::{CitationError, Result};
use crate::store::{DocumentStore, TitleField};

/// Resolve user input to a canonical document identifier.
///
/// Returns `Ok(None)` when nothing matches. Store errors propagate.
pub fn resolve_statute_id<S: DocumentStore + ?Sized>(store: &S, text: &str) -> Result<Option<String>> {
    let needle = text.trim();
    if needle.is_empty() {
        return Ok(None);
    }

    if let Some(document) = store.find_by_id(needle)? {
        tracing::debug!(input = needle, id = %document.id, "Resolved by identifier");
        return Ok(Some(document.id));
    }

    if let Some(document) =
        store.find_by_title(needle, &[TitleField::Thai, TitleField::English], None)?
    {
        tracing::debug!(input = needle, id = %document.id, "Resolved by title");
        return Ok(Some(document.id));
    }

    if let Some(document) = store.find_by_title(needle, &[TitleField::ShortName], None)? {
        tracing::debug!(input = needle, id = %document.id, "Resolved by short name");
        return Ok(Some(document.id));
    }

    tracing::debug!(input = needle, "Statute not resolved");
    Ok(None)
}

/// Resolve user input, failing with [`CitationError::StatuteNotFound`].
pub fn require_statute_id<S: DocumentStore + ?Sized>(store: &S, text: &str) -> Result<String> {
    resolve_statute_id(store, text)?
        .ok_or_else(|| CitationError::StatuteNotFound(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, ProvisionLookup, YearFilter};
    use crate::types::{Document, DocumentStatus};
    use std::cell::RefCell;

    fn document(id: &str, title_en: &str, short_name: Option<&str>) -> Document {
        Document {
            id: id.to_string(),
            title_th: format!("พระราชบัญญัติ {title_en}"),
            title_en: title_en.to_string(),
            short_name: short_name.map(str::to_string),
            status: DocumentStatus::Active,
            era_year: Some(2562),
            western_year: Some(2019),
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_document(document("pdpa-2562", "Personal Data Protection Act", Some("PDPA")))
            .with_document(document("cca-2550", "Computer Crime Act", Some("CCA")))
            .with_document(document("pdpa-eu", "Data Act", Some("PDPA-EU")))
    }

    #[test]
    fn test_exact_identifier() {
        assert_eq!(
            resolve_statute_id(&store(), "cca-2550").unwrap().as_deref(),
            Some("cca-2550")
        );
    }

    #[test]
    fn test_title_substring() {
        assert_eq!(
            resolve_statute_id(&store(), "computer crime").unwrap().as_deref(),
            Some("cca-2550")
        );
    }

    #[test]
    fn test_title_first_hit_wins() {
        // Both "Personal Data Protection Act" and "Data Act" contain "data".
        assert_eq!(
            resolve_statute_id(&store(), "data").unwrap().as_deref(),
            Some("pdpa-2562")
        );
    }

    #[test]
    fn test_short_name() {
        assert_eq!(
            resolve_statute_id(&store(), "PDPA-EU").unwrap().as_deref(),
            Some("pdpa-eu")
        );
    }

    #[test]
    fn test_not_found_and_blank() {
        assert_eq!(resolve_statute_id(&store(), "land code").unwrap(), None);
        assert_eq!(resolve_statute_id(&store(), "   ").unwrap(), None);
    }

    #[test]
    fn test_require_embeds_input() {
        let err = require_statute_id(&store(), "land code").unwrap_err();
        assert!(matches!(err, CitationError::StatuteNotFound(ref s) if s == "land code"));
    }

    /// Records which stages were queried.
    struct RecordingStore {
        inner: MemoryStore,
        calls: RefCell<Vec<String>>,
    }

    impl DocumentStore for RecordingStore {
        fn find_by_id(&self, id: &str) -> Result<Option<Document>> {
            self.calls.borrow_mut().push("id".to_string());
            self.inner.find_by_id(id)
        }

        fn find_by_title(
            &self,
            needle: &str,
            fields: &[TitleField],
            year: Option<YearFilter>,
        ) -> Result<Option<Document>> {
            self.calls.borrow_mut().push(format!("title{fields:?}"));
            self.inner.find_by_title(needle, fields, year)
        }

        fn provision_exists(&self, document_id: &str, lookup: &ProvisionLookup) -> Result<bool> {
            self.inner.provision_exists(document_id, lookup)
        }
    }

    #[test]
    fn test_stages_stop_at_first_hit() {
        let recording = RecordingStore {
            inner: store(),
            calls: RefCell::new(Vec::new()),
        };
        resolve_statute_id(&recording, "pdpa-2562").unwrap();
        assert_eq!(recording.calls.borrow().len(), 1);

        recording.calls.borrow_mut().clear();
        resolve_statute_id(&recording, "CCA").unwrap();
        assert_eq!(
            *recording.calls.borrow(),
            vec![
                "id".to_string(),
                "title[Thai, English]".to_string(),
                "title[ShortName]".to_string(),
            ]
        );
    }

    struct FailingStore;

    impl DocumentStore for FailingStore {
        fn find_by_id(&self, _id: &str) -> Result<Option<Document>> {
            Err(CitationError::Store("database is locked".to_string()))
        }

        fn find_by_title(
            &self,
            _needle: &str,
            _fields: &[TitleField],
            _year: Option<YearFilter>,
        ) -> Result<Option<Document>> {
            Ok(None)
        }

        fn provision_exists(&self, _document_id: &str, _lookup: &ProvisionLookup) -> Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_store_errors_propagate() {
        let err = resolve_statute_id(&FailingStore, "pdpa-2562").unwrap_err();
        assert!(matches!(err, CitationError::Store(_)));
    }
}
