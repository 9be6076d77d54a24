use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use stringvault_core::logging::{init_logging_with_config, LogConfig, LogLevel};
use stringvault_core::{analyze, FilterSet, JsonFileBackend, StringRegistry};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "stringvault")]
#[command(author, version, about = "Content-addressed string registry", long_about = None)]
struct Args {
    /// Set the log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Enable JSON formatted logging
    #[arg(long)]
    json_logs: bool,

    /// Path of the JSON data file
    #[arg(short, long, default_value = "data.json")]
    data_file: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a string without storing it
    Analyze {
        /// The string to analyze
        value: String,
    },

    /// Analyze a string and store it under its content hash
    Add {
        /// The string to store
        value: String,
    },

    /// Fetch a stored record by raw string or id
    Get {
        /// Raw string or id from an earlier response
        target: String,
    },

    /// List stored records, optionally narrowed by filters
    List {
        /// Keep only palindromes (or only non-palindromes with false)
        #[arg(long)]
        is_palindrome: Option<bool>,

        /// Minimum length in characters, inclusive
        #[arg(long)]
        min_length: Option<usize>,

        /// Maximum length in characters, inclusive
        #[arg(long)]
        max_length: Option<usize>,

        /// Exact whitespace-delimited word count
        #[arg(long)]
        word_count: Option<usize>,

        /// Keep only values containing this character, case-insensitive
        #[arg(long)]
        contains_character: Option<char>,
    },

    /// Filter stored records with a natural-language query
    Query {
        /// The query phrase, e.g. "strings containing the letter q"
        query: String,
    },

    /// Delete a stored record by raw string or id
    Delete {
        /// Raw string or id from an earlier response
        target: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.parse::<LogLevel>().unwrap_or_else(|_| {
        eprintln!("Invalid log level '{}', using 'warn'", args.log_level);
        LogLevel::Warn
    });
    let config = LogConfig::new(log_level).json_format(args.json_logs);
    init_logging_with_config(config)?;

    match args.command {
        // Pure analysis; no store involved
        Command::Analyze { value } => print_json(&analyze(&value)),

        Command::Add { value } => {
            let mut registry = open_registry(&args.data_file)?;
            let record = registry.create(&value)?;
            print_json(&record)
        }

        Command::Get { target } => {
            let registry = open_registry(&args.data_file)?;
            let record = registry.lookup(&target)?;
            print_json(record)
        }

        Command::List {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        } => {
            if word_count == Some(0) {
                anyhow::bail!("--word-count must be a positive integer");
            }
            let registry = open_registry(&args.data_file)?;
            let filters = FilterSet {
                is_palindrome,
                min_length,
                max_length,
                word_count,
                contains_character: contains_character
                    .map(|ch| ch.to_lowercase().next().unwrap_or(ch)),
            };
            print_json(&registry.list(&filters))
        }

        Command::Query { query } => {
            let registry = open_registry(&args.data_file)?;
            print_json(&registry.nl_query(&query)?)
        }

        Command::Delete { target } => {
            let mut registry = open_registry(&args.data_file)?;
            let record = registry.delete(&target)?;
            println!("Deleted {}", record.id);
            Ok(())
        }
    }
}

fn open_registry(data_file: &Path) -> Result<StringRegistry> {
    let registry = StringRegistry::open(Box::new(JsonFileBackend::new(data_file)))
        .with_context(|| format!("opening store at {}", data_file.display()))?;
    info!(
        "Loaded {} record(s) from {}",
        registry.len(),
        data_file.display()
    );
    Ok(registry)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
