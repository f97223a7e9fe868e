// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to the
// application layer. Printing happens here and nowhere else.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Prompt-driven session (file path, then min/max WPM)
pub mod interactive;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use crate::application::analyze_use_case::{AnalyzeUseCase, ERROR_MARKER};
use crate::data::loader::DocumentLoader;
use crate::domain::{document::DocumentFormat, traits::DocumentSource};
use crate::infra::settings::AnalyzerSettings;
use commands::{AnalyzeArgs, Commands, ExtractArgs, InteractiveArgs};
use interactive::InteractiveSession;

#[derive(Parser, Debug)]
#[command(
    name = "manuscript-analyzer",
    version,
    about = "Word counts and reading-time estimates for .docx, .pdf, .txt, .rtf and .odt manuscripts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Analyze(args)     => run_analyze(args),
            Commands::Extract(args)     => run_extract(args),
            Commands::Interactive(args) => run_interactive(args),
            Commands::Formats           => run_formats(),
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<ExitCode> {
    let speeds = AnalyzerSettings::load(args.config.as_deref())?
        .with_overrides(args.min_wpm, args.max_wpm)
        .speed_range()?;

    tracing::info!(
        "Analyzing '{}' at {}..={} WPM",
        args.path.display(),
        speeds.min_wpm(),
        speeds.max_wpm()
    );

    let outcome = AnalyzeUseCase::new(speeds).execute(&args.path);

    if args.json {
        println!("{}", outcome.to_json()?);
    } else {
        println!("{outcome}");
    }

    Ok(if outcome.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

fn run_extract(args: ExtractArgs) -> Result<ExitCode> {
    match DocumentLoader::new().load(&args.path) {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{ERROR_MARKER}{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run_interactive(args: InteractiveArgs) -> Result<ExitCode> {
    let settings = AnalyzerSettings::load(args.config.as_deref())?;
    InteractiveSession::new(settings)?.run()?;
    Ok(ExitCode::SUCCESS)
}

fn run_formats() -> Result<ExitCode> {
    for format in DocumentFormat::ALL {
        let status = if DocumentLoader::is_available(format) { "" } else { "  (not compiled in)" };
        println!("  *.{:<5} {}{}", format.extension(), format.description(), status);
    }
    Ok(ExitCode::SUCCESS)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn same_code(a: ExitCode, b: ExitCode) -> bool {
        format!("{a:?}") == format!("{b:?}")
    }

    #[test]
    fn test_extract_subcommand_parses_path() {
        let cli = Cli::try_parse_from(["manuscript-analyzer", "extract", "draft.txt"]).unwrap();
        match cli.command {
            Commands::Extract(args) => assert_eq!(args.path, PathBuf::from("draft.txt")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_extract_reads_file_without_speed_settings() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("draft.txt");
        std::fs::write(&path, "Chapter one.").unwrap();

        let code = run_extract(ExtractArgs { path }).unwrap();
        assert!(same_code(code, ExitCode::SUCCESS));
    }

    #[test]
    fn test_extract_unsupported_file_exits_with_failure() {
        let code = run_extract(ExtractArgs { path: PathBuf::from("draft.pages") }).unwrap();
        assert!(same_code(code, ExitCode::FAILURE));
    }

    #[test]
    fn test_analyze_rejects_inverted_speed_flags() {
        let cli = Cli::try_parse_from([
            "manuscript-analyzer", "analyze", "draft.txt", "--min-wpm", "300", "--max-wpm", "200",
        ])
        .unwrap();
        assert!(cli.run().is_err());
    }
}
