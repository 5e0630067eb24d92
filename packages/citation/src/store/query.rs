//! Evaluator for the full-text query syntax used by [`MemoryStore`].
//!
//! Supports the subset of FTS5 syntax that the search query builder
//! emits or passes through:
//!
//! - barewords and `"quoted phrases"`, either optionally followed by `*`
//!   for prefix matching
//! - implicit or explicit `AND`, `OR` (lower precedence), and `NOT`
//!   (excludes the following term)
//! - `""` matches nothing
//!
//! Parentheses are treated as whitespace.
//!
//! [`MemoryStore`]: crate::store::MemoryStore

/// A single searchable term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Lowercased words of the phrase.
    pub words: Vec<String>,

    /// The last word may be a prefix.
    pub prefix: bool,

    /// Term must be absent.
    pub negated: bool,
}

/// Query in disjunctive normal form: any clause may match, and every
/// term of a clause must match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub clauses: Vec<Vec<Term>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String, bool),
    Phrase(String, bool),
    And,
    Or,
    Not,
}

fn tokenize(query: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = query.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || c == '(' || c == ')' {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut phrase = String::new();
            for inner in chars.by_ref() {
                if inner == '"' {
                    break;
                }
                phrase.push(inner);
            }
            let prefix = chars.next_if_eq(&'*').is_some();
            tokens.push(Token::Phrase(phrase, prefix));
            continue;
        }

        let mut word = String::new();
        while let Some(&w) = chars.peek() {
            if w.is_whitespace() || w == '"' || w == '(' || w == ')' {
                break;
            }
            word.push(w);
            chars.next();
        }
        tokens.push(match word.as_str() {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => {
                let prefix = word.ends_with('*');
                let bare = word.trim_end_matches('*').to_string();
                Token::Word(bare, prefix)
            }
        });
    }

    tokens
}

fn term(text: &str, prefix: bool, negated: bool) -> Term {
    Term {
        words: text.split_whitespace().map(str::to_lowercase).collect(),
        prefix,
        negated,
    }
}

/// Parse a query string.
#[must_use]
pub fn parse_query(query: &str) -> Query {
    let mut clauses = vec![Vec::new()];
    let mut negate_next = false;

    for token in tokenize(query) {
        match token {
            Token::And => {}
            Token::Not => negate_next = true,
            Token::Or => {
                if clauses.last().is_some_and(|c| !c.is_empty()) {
                    clauses.push(Vec::new());
                }
            }
            Token::Word(text, prefix) | Token::Phrase(text, prefix) => {
                if let Some(clause) = clauses.last_mut() {
                    clause.push(term(&text, prefix, negate_next));
                }
                negate_next = false;
            }
        }
    }

    clauses.retain(|c| !c.is_empty());
    Query { clauses }
}

/// Lowercase and collapse whitespace so phrases match across line breaks.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Boundary check for word-separated scripts. Thai is written without
/// spaces, so a non-ASCII neighbour never blocks a match.
fn is_boundary(neighbour: Option<char>) -> bool {
    match neighbour {
        None => true,
        Some(c) => !c.is_ascii() || !is_word_char(c),
    }
}

impl Term {
    /// Whether this term occurs in already-normalized text (ignores negation).
    #[must_use]
    pub fn occurs_in(&self, text: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let needle = self.words.join(" ");

        text.match_indices(&needle).any(|(start, matched)| {
            let before = text[..start].chars().next_back();
            let after = text[start + matched.len()..].chars().next();
            is_boundary(before) && (self.prefix || is_boundary(after))
        })
    }

    fn matches(&self, text: &str) -> bool {
        self.occurs_in(text) != self.negated
    }
}

impl Query {
    /// Whether normalized text satisfies the query.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.clauses
            .iter()
            .any(|clause| clause.iter().all(|t| t.matches(text)))
    }
}
