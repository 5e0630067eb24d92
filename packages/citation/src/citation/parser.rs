//! Citation grammar.
//!
//! A citation is matched against an ordered list of [`Grammar`]s and the
//! first match wins. The grammars overlap, so the order matters: forms
//! with an explicit B.E. marker come before forms with a bare year, and
//! the abbreviated form (where a bare year may be in either epoch) comes
//! before the general English form that would otherwise claim it.
//!
//! Recognised shapes, in priority order:
//!
//! | # | Example                                                   |
//! |---|-----------------------------------------------------------|
//! | 1 | `มาตรา 3 พ.ร.บ.คุ้มครองข้อมูลส่วนบุคคล พ.ศ. 2562`          |
//! | 2 | `Section 3, Personal Data Protection Act B.E. 2562 (2019)` |
//! | 3 | `Personal Data Protection Act B.E. 2562, s. 3`            |
//! | 4 | `s. 3, PDPA 2019`                                         |
//! | 5 | `pdpa-2562, section 3`                                    |
//! | 6 | `Section 3, Personal Data Protection Act 2019`            |
//! | 7 | `Personal Data Protection Act 2019, s. 3`                 |
//! | 8 | `Personal Data Protection Act B.E. 2562` (no pinpoint)    |
//! | 9 | `Section 3, pdpa-2562` (no year)                          |

use regex::{Captures, Regex};
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::citation::abbreviations::expand_title;
use crate::config::ERA_YEAR_THRESHOLD;
use crate::types::StructuredCitation;

/// English section marker.
const EN_MARK: &str = r"(?i:section|sec\.|s\.)";
/// English or Thai section marker.
const ANY_MARK: &str = r"(?:(?i:section|sec\.|s\.)|มาตรา)";
/// Pinpoint fragment; decomposed afterwards by [`PINPOINT_PATTERN`].
const PIN: &str = r"([0-9][^\s,]*)";
/// B.E. marker in either script.
const ERA_MARK: &str = r"(?:B\.\s?E\.|พ\.\s?ศ\.)";
/// Parenthesized C.E. year after a B.E. year. Ignored: it is derived.
const PAREN_YEAR: &str = r"(?:\s*\((?:(?i:A\.D\.|C\.E\.)\s*)?[0-9]{4}\))?";

/// Build a static grammar regex from a template.
#[allow(clippy::expect_used)] // Grammar templates are constant and tested
fn grammar_regex(pattern: String) -> Regex {
    Regex::new(&pattern).expect("valid grammar regex")
}

static THAI_FULL: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^มาตรา\s*{PIN}\s+(.+?)\s+พ\.\s?ศ\.\s*([0-9]{{4}}){PAREN_YEAR}$"
    ))
});

static ENGLISH_FULL_ERA: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^{EN_MARK}\s*{PIN}\s*,?\s*(.+?)\s*,?\s+{ERA_MARK}\s*([0-9]{{4}}){PAREN_YEAR}$"
    ))
});

static TRAILING_ERA: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^(.+?)\s*,?\s+{ERA_MARK}\s*([0-9]{{4}}){PAREN_YEAR}\s*,?\s*{ANY_MARK}\s*{PIN}$"
    ))
});

static ABBREVIATED: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^{ANY_MARK}\s*{PIN}\s*,?\s*([A-Z]{{2,6}})\s+([0-9]{{4}})$"
    ))
});

static BARE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^([A-Za-z0-9][A-Za-z0-9_\-]*)\s*,\s*{ANY_MARK}\s*{PIN}$"
    ))
});

static ENGLISH_FULL_WESTERN: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^{EN_MARK}\s*{PIN}\s*,?\s*(.+?)\s*,?\s+\(?([0-9]{{4}})\)?$"
    ))
});

static TRAILING_WESTERN: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^(.+?)\s*,?\s+\(?([0-9]{{4}})\)?\s*,?\s*{ANY_MARK}\s*{PIN}$"
    ))
});

static DOCUMENT_LEVEL: LazyLock<Regex> = LazyLock::new(|| {
    grammar_regex(format!(
        r"^(.+?)\s*,?\s+{ERA_MARK}\s*([0-9]{{4}}){PAREN_YEAR}$"
    ))
});

static YEARLESS: LazyLock<Regex> =
    LazyLock::new(|| grammar_regex(format!(r"^{ANY_MARK}\s*{PIN}\s*,?\s+(\S.*)$")));

/// `digits[/digits]` then up to two parenthesized groups.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PINPOINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:/[0-9]+)?)(?:\(([^()]+)\))?(?:\(([^()]+)\))?$").expect("valid regex")
});

/// Which epoch a matched year is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Year {
    Era(i32),
    Western(i32),
    /// Bare 4-digit year; epoch decided by [`ERA_YEAR_THRESHOLD`].
    Ambiguous(i32),
    Absent,
}

impl Year {
    fn resolve(self) -> Self {
        match self {
            Self::Ambiguous(y) if y > ERA_YEAR_THRESHOLD => Self::Era(y),
            Self::Ambiguous(y) => Self::Western(y),
            other => other,
        }
    }
}

/// One entry in the ordered grammar list.
struct Grammar {
    name: &'static str,
    pattern: &'static LazyLock<Regex>,
    extract: fn(&Captures<'_>) -> Option<StructuredCitation>,
}

/// Grammars in priority order. The first to match wins.
static GRAMMARS: &[Grammar] = &[
    Grammar {
        name: "thai_full",
        pattern: &THAI_FULL,
        extract: |c| pin_title_year(c, 1, 2, Year::Era(year_at(c, 3)?), true),
    },
    Grammar {
        name: "english_full_era",
        pattern: &ENGLISH_FULL_ERA,
        extract: |c| pin_title_year(c, 1, 2, Year::Era(year_at(c, 3)?), true),
    },
    Grammar {
        name: "trailing_era",
        pattern: &TRAILING_ERA,
        extract: |c| pin_title_year(c, 3, 1, Year::Era(year_at(c, 2)?), true),
    },
    Grammar {
        name: "abbreviated",
        pattern: &ABBREVIATED,
        extract: |c| pin_title_year(c, 1, 2, Year::Ambiguous(year_at(c, 3)?), true),
    },
    Grammar {
        name: "bare_identifier",
        pattern: &BARE_IDENTIFIER,
        extract: |c| pin_title_year(c, 2, 1, Year::Absent, false),
    },
    Grammar {
        name: "english_full_western",
        pattern: &ENGLISH_FULL_WESTERN,
        extract: |c| pin_title_year(c, 1, 2, Year::Western(year_at(c, 3)?), true),
    },
    Grammar {
        name: "trailing_western",
        pattern: &TRAILING_WESTERN,
        extract: |c| pin_title_year(c, 3, 1, Year::Western(year_at(c, 2)?), true),
    },
    Grammar {
        name: "document_level",
        pattern: &DOCUMENT_LEVEL,
        extract: |c| {
            let title = c.get(1)?.as_str();
            Some(build(title, None, Year::Era(year_at(c, 2)?), true))
        },
    },
    Grammar {
        name: "yearless",
        pattern: &YEARLESS,
        extract: |c| pin_title_year(c, 1, 2, Year::Absent, false),
    },
];

fn year_at(caps: &Captures<'_>, group: usize) -> Option<i32> {
    caps.get(group)?.as_str().parse().ok()
}

fn pin_title_year(
    caps: &Captures<'_>,
    pin_group: usize,
    title_group: usize,
    year: Year,
    expand: bool,
) -> Option<StructuredCitation> {
    let pin = caps.get(pin_group)?.as_str();
    let title = caps.get(title_group)?.as_str();
    Some(build(title, Some(pin), year, expand))
}

/// Strip separators and the Thai connective "แห่ง" ("of") around a title.
fn clean_title(raw: &str) -> &str {
    let trimmed = raw.trim().trim_matches(',').trim();
    trimmed.strip_prefix("แห่ง").unwrap_or(trimmed).trim()
}

fn build(raw_title: &str, pin: Option<&str>, year: Year, expand: bool) -> StructuredCitation {
    let raw_title = clean_title(raw_title);
    let mut citation = if expand {
        let expansion = expand_title(raw_title);
        let mut citation = StructuredCitation::for_title(expansion.title);
        citation.abbreviation = expansion.abbreviation;
        citation
    } else {
        StructuredCitation::for_title(raw_title)
    };

    citation = match year.resolve() {
        Year::Era(y) => citation.with_era_year(y),
        Year::Western(y) => citation.with_western_year(y),
        Year::Ambiguous(_) | Year::Absent => citation,
    };

    if let Some(pin) = pin {
        let (section, subsection, paragraph) = split_pinpoint(pin);
        citation.section = Some(section);
        citation.subsection = subsection;
        citation.paragraph = paragraph;
    }

    citation
}

/// Split a pinpoint fragment into section, subsection and paragraph.
///
/// A fragment that doesn't fit `N[/N](sub)(para)` is kept whole as the
/// section.
///
/// # Examples
/// ```
/// use lexthai_citation::citation::parser::split_pinpoint;
///
/// assert_eq!(
///     split_pinpoint("26/1(2)(ก)"),
///     ("26/1".to_string(), Some("2".to_string()), Some("ก".to_string()))
/// );
/// assert_eq!(split_pinpoint("3bis"), ("3bis".to_string(), None, None));
/// ```
#[must_use]
pub fn split_pinpoint(pin: &str) -> (String, Option<String>, Option<String>) {
    match PINPOINT_PATTERN.captures(pin) {
        Some(caps) => (
            caps[1].to_string(),
            caps.get(2).map(|m| m.as_str().to_string()),
            caps.get(3).map(|m| m.as_str().to_string()),
        ),
        None => (pin.to_string(), None, None),
    }
}

/// NFC-normalize, map Thai digits to ASCII, collapse whitespace.
fn normalize_input(text: &str) -> String {
    let mapped: String = text
        .nfc()
        .map(|c| match c {
            '๐'..='๙' => char::from_digit(c as u32 - '๐' as u32, 10).unwrap_or(c),
            other => other,
        })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse a free-form citation.
///
/// Never fails: unrecognised input yields `valid = false` with a
/// diagnostic in `error`.
///
/// # Examples
/// ```
/// use lexthai_citation::parse_citation;
///
/// let citation = parse_citation("Section 3, Personal Data Protection Act B.E. 2562");
/// assert!(citation.valid);
/// assert_eq!(citation.section.as_deref(), Some("3"));
/// assert_eq!(citation.western_year, Some(2019));
///
/// assert!(!parse_citation("garbage text").valid);
/// ```
#[must_use]
pub fn parse_citation(text: &str) -> StructuredCitation {
    let input = normalize_input(text);
    if input.is_empty() {
        return StructuredCitation::invalid("Empty citation");
    }

    for grammar in GRAMMARS {
        let Some(caps) = grammar.pattern.captures(&input) else {
            continue;
        };
        if let Some(citation) = (grammar.extract)(&caps) {
            tracing::debug!(grammar = grammar.name, input = %input, "Citation matched");
            return citation;
        }
    }

    tracing::debug!(input = %input, "No citation grammar matched");
    StructuredCitation::invalid(format!("Unrecognized citation format: {input}"))
}
