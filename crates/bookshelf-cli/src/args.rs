//! Command-line argument parsing for bookshelf.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// bookshelf - match phenotype descriptions against reference literature
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version)]
#[command(about = "Suggest candidate conditions for a phenotype from reference text", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a phenotype description against a reference text
    Analyze(AnalyzeArgs),

    /// List key vocabulary found in a reference text
    Terms {
        /// Plain-text reference corpus
        #[arg(long)]
        corpus: PathBuf,
    },

    /// Query stored analysis history
    History {
        #[command(subcommand)]
        query: HistoryQuery,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Plain-text reference corpus
    #[arg(long)]
    pub corpus: PathBuf,

    /// Phenotype description, e.g. "coronal craniosynostosis, hearing loss"
    #[arg(long, conflicts_with = "phenotype_file", required_unless_present = "phenotype_file")]
    pub phenotype: Option<String>,

    /// Read the phenotype description from a file
    #[arg(long)]
    pub phenotype_file: Option<PathBuf>,

    /// Number of images extracted from the reference document
    #[arg(long, default_value_t = 0)]
    pub images: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Record the document, key terms, and analysis in the history store
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text report
    Text,
    /// Suggestions and image notes as JSON
    Json,
}

#[derive(Subcommand, Debug)]
pub enum HistoryQuery {
    /// Document, analysis, and suggestion counts
    Stats,

    /// Most frequently suggested conditions
    Conditions {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Search past analyses by phenotype text
    Search {
        term: String,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Recently stored reference documents
    Documents {
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}
