//! # Check Subcommand
//!
//! Runs one validation pass over a locale directory and reports the
//! findings. Exit code 0 means a clean catalog; 1 means findings (or the
//! reference advisory) were produced.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

use locv_validator::{LocaleValidator, ValidatorOptions};

/// Arguments for the `locv check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing the locale catalog.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Reference catalog filename within the root directory.
    #[arg(long, default_value = "en.yml")]
    pub reference: String,

    /// Restrict the run to a single candidate filename.
    #[arg(long)]
    pub file: Option<String>,

    /// Skip the missing-translation and pluralization checks.
    #[arg(long)]
    pub no_missing: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One finding per line, plus a summary.
    Text,
    /// A JSON report object.
    Json,
}

/// JSON report shape for `--format json`.
#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    reference: &'a str,
    findings: &'a [String],
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let options = ValidatorOptions {
        show_missing: !args.no_missing,
    };
    let validator = LocaleValidator::new(
        args.root.clone(),
        args.reference.clone(),
        args.file.clone(),
        options,
    );

    tracing::debug!(root = %args.root.display(), reference = %args.reference, "starting check");
    let findings = validator.validate();

    match args.format {
        OutputFormat::Text => {
            for finding in &findings {
                println!("{finding}");
            }
            if findings.is_empty() {
                println!("no problems found");
            } else {
                println!("found {} problem(s)", findings.len());
            }
        }
        OutputFormat::Json => {
            let report = CheckReport {
                reference: &args.reference,
                findings: &findings,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if findings.is_empty() { 0 } else { 1 })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(root: &std::path::Path) -> CheckArgs {
        CheckArgs {
            root: root.to_path_buf(),
            reference: "en.yml".to_string(),
            file: None,
            no_missing: false,
            format: OutputFormat::Text,
        }
    }

    #[test]
    fn clean_catalog_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.yml"),
            "en:\n  app:\n    greeting: \"Hello %{name}\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("es.yml"),
            "es:\n  app:\n    greeting: \"Hola %{name}\"\n",
        )
        .unwrap();

        assert_eq!(run_check(&args(dir.path())).unwrap(), 0);
    }

    #[test]
    fn findings_exit_one() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.yml"),
            "en:\n  app:\n    greeting: \"Hello %{name}\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("es.yml"),
            "es:\n  app:\n    greeting: \"Hola %{nombre}\"\n",
        )
        .unwrap();

        assert_eq!(run_check(&args(dir.path())).unwrap(), 1);
    }

    #[test]
    fn missing_reference_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(run_check(&args(dir.path())).unwrap(), 1);
    }

    #[test]
    fn json_format_also_reports_exit_status() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("en.yml"),
            "en:\n  app:\n    greeting: Hello\n",
        )
        .unwrap();
        let mut a = args(dir.path());
        a.format = OutputFormat::Json;
        assert_eq!(run_check(&a).unwrap(), 0);
    }
}
