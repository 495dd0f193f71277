use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert PDF screenplays into structured, typed screenplay elements.
#[derive(Debug, Parser)]
#[command(name = "screenplay", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a PDF screenplay and write the structured result
    Parse {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path of the output file
        #[arg(value_name = "OUT")]
        output: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ParseFormat::Text)]
        format: ParseFormat,
    },

    /// Write a per-element classification listing for debugging
    Debug {
        /// Path to the PDF file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Path of the output text file
        #[arg(value_name = "OUT")]
        output: PathBuf,
    },
}

/// Output format for the parse subcommand.
#[derive(Debug, Clone, ValueEnum)]
pub enum ParseFormat {
    /// Screenplay-layout plain text
    Text,
    /// Compact JSON of the full script
    Json,
    /// Pretty-printed JSON of the full script
    JsonPretty,
    /// Structural outline (pages and typed elements, no geometry)
    Structured,
}
