// ============================================================
// Layer 1 — Interactive Session
// ============================================================
// Terminal stand-in for the file picker and the two numeric
// prompts:
//
//   File path> ~/novel.docx
//   Selected file: ~/novel.docx
//   Detected extension: docx
//
//   Processing...
//   Enter minimum WPM (default 200):
//   Enter maximum WPM (default 280):
//   <report>
//
// Every prompt can be cancelled with Ctrl-C / Ctrl-D. Cancelling
// the path prompt (or entering an empty path) ends the session;
// cancelling a WPM prompt abandons only the current request.
// The session state (editor + settings) lives only here.

use anyhow::Result;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::path::PathBuf;

use crate::application::analyze_use_case::AnalyzeUseCase;
use crate::domain::{document::DocumentFormat, speed::SpeedRange};
use crate::infra::settings::AnalyzerSettings;

pub struct InteractiveSession {
    editor:   DefaultEditor,
    settings: AnalyzerSettings,
}

impl InteractiveSession {
    pub fn new(settings: AnalyzerSettings) -> Result<Self> {
        Ok(Self { editor: DefaultEditor::new()?, settings })
    }

    pub fn run(&mut self) -> Result<()> {
        println!("Manuscript Analyzer. Enter a file path, or an empty line to quit.");

        while let Some(path) = self.prompt_path()? {
            println!(
                "Selected file: {}\nDetected extension: {}\n\nProcessing...",
                path.display(),
                DocumentFormat::extension_of(&path)
            );

            let Some(speeds) = self.prompt_speeds()? else {
                println!("Cancelled.");
                continue;
            };

            let outcome = AnalyzeUseCase::new(speeds).execute(&path);
            println!("\n{outcome}\n");
        }

        tracing::debug!("Interactive session ended");
        Ok(())
    }

    /// `None` when the user cancels or enters nothing
    fn prompt_path(&mut self) -> Result<Option<PathBuf>> {
        let Some(line) = self.read_line("File path> ")? else {
            return Ok(None);
        };
        let cleaned = clean_path_input(&line);
        if cleaned.is_empty() {
            return Ok(None);
        }
        self.editor.add_history_entry(cleaned)?;
        Ok(Some(PathBuf::from(cleaned)))
    }

    fn prompt_speeds(&mut self) -> Result<Option<SpeedRange>> {
        let Some(min) = self.prompt_wpm("minimum", self.settings.min_wpm.max(1), 1)? else {
            return Ok(None);
        };
        let default_max = self.settings.max_wpm.max(min);
        let Some(max) = self.prompt_wpm("maximum", default_max, min)? else {
            return Ok(None);
        };
        Ok(Some(SpeedRange::new(min, max)?))
    }

    /// Ask until a valid value is given or the prompt is cancelled
    fn prompt_wpm(&mut self, label: &str, default: u32, lower_bound: u32) -> Result<Option<u32>> {
        let prompt = format!("Enter {label} WPM (default {default}): ");
        loop {
            let Some(line) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            match parse_wpm(&line, default, lower_bound) {
                Ok(value) => return Ok(Some(value)),
                Err(msg)  => println!("{msg}"),
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Trim whitespace and the quotes terminals add on drag-and-drop
fn clean_path_input(line: &str) -> &str {
    line.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

/// Empty input takes the default; otherwise a whole number that
/// is at least `lower_bound`.
fn parse_wpm(input: &str, default: u32, lower_bound: u32) -> Result<u32, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    let value: u32 = input
        .parse()
        .map_err(|_| format!("'{input}' is not a whole number."))?;
    if value < lower_bound {
        return Err(format!("Value must be at least {lower_bound}."));
    }
    Ok(value)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_takes_default() {
        assert_eq!(parse_wpm("", 200, 1), Ok(200));
        assert_eq!(parse_wpm("   ", 280, 200), Ok(280));
    }

    #[test]
    fn test_accepts_number_at_bound() {
        assert_eq!(parse_wpm(" 250 ", 280, 250), Ok(250));
    }

    #[test]
    fn test_rejects_below_bound() {
        assert_eq!(parse_wpm("0", 200, 1), Err("Value must be at least 1.".to_string()));
        assert!(parse_wpm("150", 280, 200).is_err());
    }

    #[test]
    fn test_rejects_non_numbers() {
        assert!(parse_wpm("fast", 200, 1).is_err());
        assert!(parse_wpm("-5", 200, 1).is_err());
    }

    #[test]
    fn test_path_input_is_unquoted() {
        assert_eq!(clean_path_input("  '/tmp/my novel.docx' \n"), "/tmp/my novel.docx");
        assert_eq!(clean_path_input("\"draft.odt\""), "draft.odt");
        assert_eq!(clean_path_input("   "), "");
    }
}
