// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Four subcommands:
//   analyze      — full report for one file
//   extract      — print the extracted text only
//   interactive  — prompt for a file and speeds, repeatedly
//   formats      — list supported extensions
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a manuscript and print word counts and reading times
    Analyze(AnalyzeArgs),

    /// Print the plain text extracted from a manuscript
    Extract(ExtractArgs),

    /// Prompt for files and reading speeds until cancelled
    Interactive(InteractiveArgs),

    /// List the supported document formats
    Formats,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Manuscript to analyze (.docx, .pdf, .txt, .rtf, .odt)
    pub path: PathBuf,

    /// Lowest reading speed in words per minute (>= 1)
    #[arg(long)]
    pub min_wpm: Option<u32>,

    /// Highest reading speed in words per minute (>= min-wpm)
    #[arg(long)]
    pub max_wpm: Option<u32>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// JSON settings file with default min_wpm / max_wpm
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Manuscript to extract text from
    pub path: PathBuf,
}

#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// JSON settings file with default min_wpm / max_wpm
    #[arg(long)]
    pub config: Option<PathBuf>,
}
