//! Command-line interface.
//!
//! Every subcommand maps onto one public operation of the crate. Commands
//! that need a document store load a YAML seed file (see
//! [`MemoryStore`](crate::store::MemoryStore)) from `--seed` or the
//! `LEXTHAI_SEED` environment variable.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use serde::Serialize;
use textwrap::{fill, Options};

use crate::citation::{format_citation, parse_citation, CitationFormat};
use crate::config::{DEFAULT_SEARCH_LIMIT, SEED_ENV_VAR, SNIPPET_WRAP_WIDTH};
use crate::error::Result;
use crate::resolver::require_statute_id;
use crate::search::{build_search_query, search_with_fallback};
use crate::store::{MemoryStore, ProvisionLookup};
use crate::types::{StructuredCitation, ValidationResult};
use crate::validator::validate_citation;

/// LexThai - Parse, validate and search Thai statute citations.
#[derive(Parser)]
#[command(name = "lexthai")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a citation into its parts.
    Parse {
        /// Citation text (e.g. "s. 3, PDPA 2019")
        citation: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render a citation in a canonical format.
    Format {
        /// Citation text
        citation: String,

        /// Output format: full_en, full_th, short, academic
        #[arg(short, long, default_value = "full_en")]
        format: String,

        /// Print every format
        #[arg(long, conflicts_with = "format")]
        all: bool,
    },

    /// Check a citation against the document store.
    Validate {
        /// Citation text
        citation: String,

        /// YAML seed file
        #[arg(long, env = SEED_ENV_VAR)]
        seed: PathBuf,

        /// Print the provision text when found
        #[arg(long)]
        show_text: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Resolve an identifier, title fragment or short name to a document id.
    Resolve {
        /// Identifier or title fragment
        text: String,

        /// YAML seed file
        #[arg(long, env = SEED_ENV_VAR)]
        seed: PathBuf,
    },

    /// Show the full-text query built for some search text.
    Query {
        /// Search text
        text: String,
    },

    /// Search provision text, falling back to a looser query if needed.
    Search {
        /// Search text
        text: String,

        /// YAML seed file
        #[arg(long, env = SEED_ENV_VAR)]
        seed: PathBuf,

        /// Maximum number of hits
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT)]
        limit: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI, returning the process exit code.
///
/// `validate` exits with 1 when the citation does not check out.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { citation, json } => parse_command(&citation, json),
        Commands::Format {
            citation,
            format,
            all,
        } => format_command(&citation, &format, all),
        Commands::Validate {
            citation,
            seed,
            show_text,
            json,
        } => validate_command(&citation, &seed, show_text, json),
        Commands::Resolve { text, seed } => resolve_command(&text, &seed),
        Commands::Query { text } => {
            print_json(&build_search_query(&text))?;
            Ok(0)
        }
        Commands::Search {
            text,
            seed,
            limit,
            json,
        } => search_command(&text, &seed, limit, json),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn load_store(seed: &Path) -> Result<MemoryStore> {
    MemoryStore::from_path(seed).inspect_err(|e| {
        tracing::warn!(seed = %seed.display(), error = %e, "Failed to load seed file");
    })
}

fn print_field(label: &str, value: Option<impl std::fmt::Display>) {
    if let Some(value) = value {
        println!("  {:<13}{}", format!("{label}:"), value);
    }
}

fn print_citation(citation: &StructuredCitation) {
    if !citation.valid {
        println!(
            "{} {}",
            style("Invalid:").red().bold(),
            citation.error.as_deref().unwrap_or_default()
        );
        return;
    }

    println!("{} {}", style("Kind:").bold(), citation.kind.as_str());
    print_field("Title", citation.title.as_deref());
    print_field("Abbreviation", citation.abbreviation.as_deref());
    print_field("Year (B.E.)", citation.era_year);
    print_field("Year (C.E.)", citation.western_year);
    print_field("Section", citation.section.as_deref());
    print_field("Subsection", citation.subsection.as_deref());
    print_field("Paragraph", citation.paragraph.as_deref());
}

fn parse_command(text: &str, json: bool) -> Result<i32> {
    let citation = parse_citation(text);
    if json {
        print_json(&citation)?;
    } else {
        print_citation(&citation);
    }
    Ok(if citation.valid { 0 } else { 1 })
}

fn format_command(text: &str, format: &str, all: bool) -> Result<i32> {
    let citation = parse_citation(text);
    if !citation.valid {
        print_citation(&citation);
        return Ok(1);
    }

    if all {
        for format in CitationFormat::ALL {
            println!(
                "{:<9} {}",
                style(format.as_str()).cyan(),
                format_citation(&citation, format)
            );
        }
    } else {
        println!(
            "{}",
            format_citation(&citation, CitationFormat::from_name(format))
        );
    }
    Ok(0)
}

fn print_validation(result: &ValidationResult) {
    let verdict = if result.is_valid() {
        style("VALID").green().bold()
    } else {
        style("NOT VALID").red().bold()
    };
    println!("{verdict}");

    let pinpoint = result.citation.pinpoint();
    print_field("Document", result.document_title.as_deref());
    print_field("Identifier", result.document_id.as_deref());
    print_field("Status", result.status.map(|s| s.as_str()));
    print_field("Section", pinpoint.as_deref());

    for warning in &result.warnings {
        println!("  {} {}", style("warning:").yellow().bold(), warning);
    }
}

fn validate_command(text: &str, seed: &Path, show_text: bool, json: bool) -> Result<i32> {
    let store = load_store(seed)?;
    let result = validate_citation(&store, text)?;

    if json {
        print_json(&result)?;
    } else {
        print_validation(&result);
        if show_text {
            let provision = result.document_id.as_deref().and_then(|id| {
                let lookup = ProvisionLookup::from_citation(&result.citation)?;
                store.find_provision(id, &lookup)
            });
            if let Some(provision) = provision {
                println!();
                println!("{}", fill(&provision.text, Options::new(SNIPPET_WRAP_WIDTH)));
            }
        }
    }

    Ok(if result.is_valid() { 0 } else { 1 })
}

fn resolve_command(text: &str, seed: &Path) -> Result<i32> {
    let store = load_store(seed)?;
    println!("{}", require_statute_id(&store, text)?);
    Ok(0)
}

fn search_command(text: &str, seed: &Path, limit: usize, json: bool) -> Result<i32> {
    let store = load_store(seed)?;
    let outcome = search_with_fallback(&store, text, limit)?;

    if json {
        print_json(&outcome)?;
        return Ok(0);
    }

    let query = match (&outcome.variants.fallback, outcome.used_fallback) {
        (Some(fallback), true) => fallback,
        _ => &outcome.variants.primary,
    };
    println!(
        "{} {} ({} hits{})",
        style("Query:").bold(),
        query,
        outcome.hits.len(),
        if outcome.used_fallback { ", fallback" } else { "" }
    );

    let options = Options::new(SNIPPET_WRAP_WIDTH)
        .initial_indent("    ")
        .subsequent_indent("    ");
    for hit in &outcome.hits {
        println!();
        println!(
            "  {} s. {}",
            style(&hit.document_id).cyan(),
            style(&hit.reference).green()
        );
        println!("{}", fill(&hit.snippet, &options));
    }

    Ok(0)
}
