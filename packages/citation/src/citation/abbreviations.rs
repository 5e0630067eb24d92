//! Lookup tables for abbreviation and short-title expansion.
//!
//! Both tables map to the canonical English title of an act. A miss is
//! not an error: [`expand_title`] then returns the text unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

/// (abbreviation, canonical English title)
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("PDPA", "Personal Data Protection Act"),
    ("CCC", "Civil and Commercial Code"),
    ("CCA", "Computer Crime Act"),
    ("ETA", "Electronic Transactions Act"),
    ("LPA", "Labour Protection Act"),
    ("CPA", "Consumer Protection Act"),
    ("PC", "Penal Code"),
    ("CPC", "Criminal Procedure Code"),
    ("CVPC", "Civil Procedure Code"),
    ("OIA", "Official Information Act"),
    ("CSA", "Cybersecurity Act"),
];

/// (Thai short or full title, canonical English title)
const THAI_TITLES: &[(&str, &str)] = &[
    ("พ.ร.บ.คุ้มครองข้อมูลส่วนบุคคล", "Personal Data Protection Act"),
    ("พระราชบัญญัติคุ้มครองข้อมูลส่วนบุคคล", "Personal Data Protection Act"),
    ("ประมวลกฎหมายแพ่งและพาณิชย์", "Civil and Commercial Code"),
    ("ป.พ.พ.", "Civil and Commercial Code"),
    ("ประมวลกฎหมายอาญา", "Penal Code"),
    ("ป.อ.", "Penal Code"),
    ("ประมวลกฎหมายวิธีพิจารณาความอาญา", "Criminal Procedure Code"),
    ("ป.วิ.อ.", "Criminal Procedure Code"),
    ("ประมวลกฎหมายวิธีพิจารณาความแพ่ง", "Civil Procedure Code"),
    ("ป.วิ.พ.", "Civil Procedure Code"),
    (
        "พ.ร.บ.ว่าด้วยการกระทำความผิดเกี่ยวกับคอมพิวเตอร์",
        "Computer Crime Act",
    ),
    (
        "พระราชบัญญัติว่าด้วยการกระทำความผิดเกี่ยวกับคอมพิวเตอร์",
        "Computer Crime Act",
    ),
    ("พ.ร.บ.ว่าด้วยธุรกรรมทางอิเล็กทรอนิกส์", "Electronic Transactions Act"),
    (
        "พระราชบัญญัติว่าด้วยธุรกรรมทางอิเล็กทรอนิกส์",
        "Electronic Transactions Act",
    ),
    ("พ.ร.บ.คุ้มครองแรงงาน", "Labour Protection Act"),
    ("พระราชบัญญัติคุ้มครองแรงงาน", "Labour Protection Act"),
    ("พ.ร.บ.คุ้มครองผู้บริโภค", "Consumer Protection Act"),
    ("พระราชบัญญัติคุ้มครองผู้บริโภค", "Consumer Protection Act"),
    ("พ.ร.บ.ข้อมูลข่าวสารของราชการ", "Official Information Act"),
    ("พระราชบัญญัติข้อมูลข่าวสารของราชการ", "Official Information Act"),
    ("พ.ร.บ.การรักษาความมั่นคงปลอดภัยไซเบอร์", "Cybersecurity Act"),
    ("พระราชบัญญัติการรักษาความมั่นคงปลอดภัยไซเบอร์", "Cybersecurity Act"),
];

static ABBREVIATION_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ABBREVIATIONS.iter().copied().collect());

/// Keys have internal whitespace removed so "พ.ร.บ. คุ้มครอง..." matches too.
static THAI_TITLE_INDEX: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    THAI_TITLES
        .iter()
        .map(|(thai, english)| (squash_whitespace(thai), *english))
        .collect()
});

fn squash_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Result of expanding a raw title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Canonical title, or the raw text when nothing matched.
    pub title: String,

    /// The abbreviation that was expanded, if any.
    pub abbreviation: Option<String>,
}

/// Expand an abbreviation or known Thai title to its canonical English title.
///
/// # Examples
/// ```
/// use lexthai_citation::citation::abbreviations::expand_title;
///
/// assert_eq!(expand_title("PDPA").title, "Personal Data Protection Act");
/// assert_eq!(expand_title("Some Other Act").title, "Some Other Act");
/// ```
#[must_use]
pub fn expand_title(raw: &str) -> Expansion {
    let raw = raw.trim();

    if let Some(title) = ABBREVIATION_INDEX.get(raw) {
        return Expansion {
            title: (*title).to_string(),
            abbreviation: Some(raw.to_string()),
        };
    }

    if let Some(title) = THAI_TITLE_INDEX.get(&squash_whitespace(raw)) {
        return Expansion {
            title: (*title).to_string(),
            abbreviation: None,
        };
    }

    Expansion {
        title: raw.to_string(),
        abbreviation: None,
    }
}

/// Find the abbreviation for a canonical English title.
#[must_use]
pub fn abbreviation_for(title: &str) -> Option<&'static str> {
    ABBREVIATIONS
        .iter()
        .find(|(_, canonical)| canonical.eq_ignore_ascii_case(title.trim()))
        .map(|(abbreviation, _)| *abbreviation)
}
