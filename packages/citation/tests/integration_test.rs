//! End-to-end tests for the citation core.
//!
//! Runs parsing, formatting, resolution, validation and search against
//! the small bilingual corpus in `tests/fixtures/seed.yaml`.

use std::io::Write;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;

use lexthai_citation::calendar::{to_era, to_western};
use lexthai_citation::{
    build_search_query, format_citation, parse_citation, require_statute_id, resolve_statute_id,
    search_with_fallback, validate_citation, CitationError, CitationFormat, CitationKind,
    DocumentStatus, DocumentStore, MemoryStore, QueryMode, StructuredCitation, TextIndex,
};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("seed.yaml")
}

/// Load the fixture corpus.
fn load_store() -> MemoryStore {
    let path = fixture_path();
    MemoryStore::from_path(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// The parts of a citation that must survive formatting and re-parsing.
fn essentials(c: &StructuredCitation) -> (Option<&str>, Option<&str>, Option<i32>, Option<i32>) {
    (
        c.title.as_deref(),
        c.section.as_deref(),
        c.era_year,
        c.western_year,
    )
}

#[test]
fn test_fixture_loads_with_completed_years() {
    let store = load_store();

    let cca = store.find_by_id("cca-2550").unwrap().unwrap();
    assert_eq!(cca.era_year, Some(2550));
    assert_eq!(cca.western_year, Some(2007));

    for id in ["pdpa-2562", "cca-2550", "eta-2544", "rcd-2534"] {
        let document = store.find_by_id(id).unwrap().unwrap();
        let (Some(era), Some(western)) = (document.era_year, document.western_year) else {
            panic!("{id} is missing a year");
        };
        assert_eq!(to_western(era), western, "{id}");
        assert_eq!(to_era(western), era, "{id}");
    }

    let references: Vec<&str> = store
        .provisions_of("pdpa-2562")
        .map(|p| p.reference.as_str())
        .collect();
    assert_eq!(references, vec!["3", "19", "26(1)"]);
}

#[test]
fn test_every_grammar_on_one_provision() {
    let inputs = [
        "มาตรา 3 พ.ร.บ.คุ้มครองข้อมูลส่วนบุคคล พ.ศ. 2562",
        "Section 3, Personal Data Protection Act B.E. 2562 (2019)",
        "Personal Data Protection Act B.E. 2562, s. 3",
        "s. 3, PDPA 2019",
        "s. 3, PDPA 2562",
        "Section 3, Personal Data Protection Act 2019",
        "Personal Data Protection Act 2019, s. 3",
        "มาตรา ๓ พ.ร.บ. คุ้มครองข้อมูลส่วนบุคคล พ.ศ. ๒๕๖๒",
    ];

    for input in inputs {
        let c = parse_citation(input);
        assert!(c.valid, "{input}: {:?}", c.error);
        assert_eq!(
            essentials(&c),
            (Some("Personal Data Protection Act"), Some("3"), Some(2562), Some(2019)),
            "{input}"
        );
    }
}

#[test]
fn test_valid_citations_satisfy_year_invariant() {
    let inputs = [
        "Section 26(1)(a), Civil and Commercial Code B.E. 2468",
        "s. 14, CCA 2007",
        "Land Code 1954, section 5",
        "cca-2550, มาตรา 14",
        "Royal Decree on Public Order Announcements B.E. 2534",
    ];

    for input in inputs {
        let c = parse_citation(input);
        assert!(c.valid, "{input}");
        assert!(c.error.is_none(), "{input}");
        assert!(c.title.is_some(), "{input}");
        if let (Some(era), Some(western)) = (c.era_year, c.western_year) {
            assert_eq!(era - western, 543, "{input}");
        }
    }
}

#[test]
fn test_invalid_citations() {
    for input in ["", "   ", "garbage text", "Section, PDPA", "2019"] {
        let c = parse_citation(input);
        assert!(!c.valid, "{input}");
        assert!(c.error.is_some(), "{input}");
        assert!(c.title.is_none(), "{input}");
        assert!(c.section.is_none(), "{input}");
    }
}

#[test]
fn test_bare_identifier_keeps_title() {
    let c = parse_citation("cca-2550, มาตรา 14");
    assert_eq!(c.title.as_deref(), Some("cca-2550"));
    assert_eq!(c.section.as_deref(), Some("14"));
    assert_eq!(c.era_year, None);
    assert_eq!(c.western_year, None);
}

#[test]
fn test_royal_decree_kind() {
    let c = parse_citation("Section 1, Royal Decree on Public Order Announcements B.E. 2534");
    assert_eq!(c.kind, CitationKind::RoyalDecree);
    assert_eq!(parse_citation("s. 3, PDPA 2019").kind, CitationKind::Statute);
}

#[test]
fn test_format_then_parse_preserves_citation() {
    let original = parse_citation("Section 19, Personal Data Protection Act B.E. 2562");

    for format in CitationFormat::ALL {
        let rendered = format_citation(&original, format);
        let reparsed = parse_citation(&rendered);
        assert!(reparsed.valid, "{format}: {rendered}");
        assert_eq!(essentials(&reparsed), essentials(&original), "{format}: {rendered}");
    }
}

#[test]
fn test_yearless_citation_survives_every_format() {
    let store = load_store();
    let original = parse_citation("cca-2550, section 14");

    for format in CitationFormat::ALL {
        let rendered = format_citation(&original, format);
        let reparsed = parse_citation(&rendered);
        assert!(reparsed.valid, "{format}: {rendered}");
        assert_eq!(essentials(&reparsed), essentials(&original), "{format}: {rendered}");
        assert_eq!(format_citation(&reparsed, format), rendered, "{format}");

        let result = validate_citation(&store, &rendered).unwrap();
        assert!(result.is_valid(), "{format}: {:?}", result.warnings);
    }
}

#[test]
fn test_formats_for_known_citation() {
    let c = parse_citation("s. 26(1), PDPA 2019");
    assert_eq!(
        format_citation(&c, CitationFormat::FullEn),
        "Section 26(1), Personal Data Protection Act B.E. 2562 (2019)"
    );
    assert_eq!(
        format_citation(&c, CitationFormat::FullTh),
        "มาตรา 26(1) Personal Data Protection Act พ.ศ. 2562"
    );
    assert_eq!(format_citation(&c, CitationFormat::Short), "s. 26(1), PDPA 2019");
    assert_eq!(
        format_citation(&c, CitationFormat::Academic),
        "Personal Data Protection Act B.E. 2562 (2019), s. 26(1)"
    );
}

#[test]
fn test_format_of_invalid_citation_is_empty() {
    let c = parse_citation("garbage text");
    for format in CitationFormat::ALL {
        assert_eq!(format_citation(&c, format), "");
    }
}

#[test]
fn test_resolver_stages() {
    let store = load_store();
    let resolve = |text: &str| resolve_statute_id(&store, text).unwrap();

    assert_eq!(resolve("pdpa-2562").as_deref(), Some("pdpa-2562"));
    assert_eq!(resolve("Computer Crime").as_deref(), Some("cca-2550"));
    assert_eq!(resolve("computer crime").as_deref(), Some("cca-2550"));
    assert_eq!(resolve("ข้อมูลส่วนบุคคล").as_deref(), Some("pdpa-2562"));
    assert_eq!(resolve("ETA").as_deref(), Some("eta-2544"));
    assert_eq!(resolve("Land Code"), None);
    assert_eq!(resolve("  "), None);
}

#[test]
fn test_require_statute_id_reports_input() {
    let store = load_store();
    assert_eq!(require_statute_id(&store, "PDPA").unwrap(), "pdpa-2562");

    let err = require_statute_id(&store, "Land Code").unwrap_err();
    assert!(matches!(err, CitationError::StatuteNotFound(ref text) if text == "Land Code"));
}

#[test]
fn test_validate_found_citations() {
    let store = load_store();
    let inputs = [
        ("Section 3, Personal Data Protection Act B.E. 2562", "pdpa-2562"),
        ("มาตรา 26(1) พ.ร.บ.คุ้มครองข้อมูลส่วนบุคคล พ.ศ. 2562", "pdpa-2562"),
        ("s. 14, CCA 2007", "cca-2550"),
        ("Electronic Transactions Act 2001, s. 7", "eta-2544"),
        ("cca-2550, section 5", "cca-2550"),
    ];

    for (input, id) in inputs {
        let result = validate_citation(&store, input).unwrap();
        assert!(result.is_valid(), "{input}: {:?}", result.warnings);
        assert!(result.warnings.is_empty(), "{input}: {:?}", result.warnings);
        assert_eq!(result.document_id.as_deref(), Some(id), "{input}");
    }
}

#[test]
fn test_validate_missing_section() {
    let store = load_store();
    let result = validate_citation(&store, "Section 999, PDPA 2019").unwrap();
    assert!(result.document_exists);
    assert!(!result.provision_exists);
    assert_eq!(
        result.warnings,
        vec!["Section 999 not found in Personal Data Protection Act".to_string()]
    );
}

#[test]
fn test_validate_year_must_match() {
    let store = load_store();
    let result = validate_citation(&store, "s. 3, PDPA 2020").unwrap();
    assert!(!result.document_exists);
    assert!(!result.provision_exists);
    assert_eq!(
        result.warnings,
        vec!["Document not found: Personal Data Protection Act B.E. 2563".to_string()]
    );
}

#[test]
fn test_validate_repealed_document() {
    let store = load_store();
    let result = validate_citation(
        &store,
        "Section 1, Royal Decree on Public Order Announcements B.E. 2534",
    )
    .unwrap();
    assert!(result.is_valid());
    assert_eq!(result.status, Some(DocumentStatus::Repealed));
    assert_eq!(
        result.warnings,
        vec!["Royal Decree on Public Order Announcements has been repealed".to_string()]
    );
}

#[test]
fn test_validate_never_reports_provision_without_document() {
    let store = load_store();
    for input in [
        "Section 3, Personal Data Protection Act B.E. 2562",
        "Section 3, Land Code B.E. 2497",
        "s. 3, PDPA 2020",
        "garbage text",
        "",
    ] {
        let result = validate_citation(&store, input).unwrap();
        assert!(!result.provision_exists || result.document_exists, "{input}");
        if !result.citation.valid {
            assert!(!result.document_exists, "{input}");
            assert!(!result.warnings.is_empty(), "{input}");
        }
    }
}

#[test]
fn test_search_natural_query() {
    let store = load_store();
    let outcome = search_with_fallback(&store, "personal data", 10).unwrap();
    assert_eq!(outcome.variants.mode, QueryMode::Natural);
    assert!(!outcome.used_fallback);

    let references: Vec<&str> = outcome.hits.iter().map(|h| h.reference.as_str()).collect();
    assert_eq!(references, vec!["3", "19", "26(1)"]);
}

#[test]
fn test_search_respects_limit() {
    let store = load_store();
    let outcome = search_with_fallback(&store, "personal data", 2).unwrap();
    assert_eq!(outcome.hits.len(), 2);
}

#[test]
fn test_search_falls_back_to_any_keyword() {
    let store = load_store();
    let outcome = search_with_fallback(&store, "consent teleportation", 10).unwrap();
    assert!(outcome.used_fallback);
    assert_eq!(
        outcome.variants.fallback.as_deref(),
        Some("consent* OR teleportation*")
    );
    let references: Vec<&str> = outcome.hits.iter().map(|h| h.reference.as_str()).collect();
    assert_eq!(references, vec!["19", "26(1)"]);
}

#[test]
fn test_search_hyphenated_token() {
    let store = load_store();
    let outcome = search_with_fallback(&store, "e-commerce", 10).unwrap();
    assert_eq!(outcome.hits.len(), 1);
    assert_eq!(outcome.hits[0].document_id, "eta-2544");
}

#[test]
fn test_search_explicit_query() {
    let store = load_store();
    let outcome = search_with_fallback(&store, r#""computer system" NOT forged"#, 10).unwrap();
    assert_eq!(outcome.variants.mode, QueryMode::Explicit);
    assert_eq!(outcome.hits.len(), 1);
    assert_eq!(outcome.hits[0].reference, "5");
}

#[test]
fn test_empty_query_matches_nothing() {
    let store = load_store();
    let variants = build_search_query("?!");
    assert_eq!(variants.mode, QueryMode::Empty);
    assert!(store.search(&variants.primary, 10).unwrap().is_empty());
}

#[test]
fn test_build_search_query_is_deterministic() {
    for text in ["personal data", r#""data" OR consent"#, "", "ข้อมูล ส่วนบุคคล"] {
        assert_eq!(build_search_query(text), build_search_query(text));
        assert_eq!(build_search_query(text).primary.matches('"').count() % 2, 0);
    }
}

#[test]
fn test_seed_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "documents:\n  - id: lpa-2541\n    title_th: พระราชบัญญัติคุ้มครองแรงงาน\n    title_en: Labour Protection Act\n    status: active\n    era_year: 2541\n    provisions:\n      - section: \"118\"\n        text: Severance pay."
    )
    .unwrap();

    let store = MemoryStore::from_path(file.path()).unwrap();
    let result = validate_citation(&store, "s. 118, LPA 1998").unwrap();
    assert!(result.is_valid(), "{:?}", result.warnings);
}

#[test]
fn test_bad_seed_files() {
    let missing = tempfile::tempdir().unwrap().path().join("missing.yaml");
    assert!(matches!(
        MemoryStore::from_path(&missing),
        Err(CitationError::Io(_))
    ));

    let duplicate = "documents:\n  - {id: a, title_th: ก, title_en: A, status: active}\n  - {id: a, title_th: ข, title_en: B, status: active}\n";
    assert!(matches!(
        MemoryStore::from_yaml_str(duplicate),
        Err(CitationError::InvalidSeed(_))
    ));

    let mismatched =
        "documents:\n  - {id: a, title_th: ก, title_en: A, status: active, era_year: 2562, western_year: 2020}\n";
    assert!(matches!(
        MemoryStore::from_yaml_str(mismatched),
        Err(CitationError::InvalidSeed(_))
    ));

    assert!(matches!(
        MemoryStore::from_yaml_str("documents: [not, a, document]"),
        Err(CitationError::Yaml(_))
    ));
}
