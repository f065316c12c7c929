//! Diff command
//!
//! Usage: wdiffer [OPTIONS] <FILE1> <FILE2>
//!
//! ## Logging Ownership
//!
//! This command owns lifecycle logging for the `word_diff` operation:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The core library uses only `tracing::debug!()` for internal details.

use clap::{Args, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use wdiffer_core::diff::{
    compute_edits_with, render_statistics, DiffOptions, DiffReport, DiffStats,
};
use wdiffer_core::errors::{Result, WdiffError};
use wdiffer_core::logging_facility::{init, Profile};
use wdiffer_core::render::{write_stream, Markers};
use wdiffer_core::token::tokenize_file;
use wdiffer_core::{log_op_end, log_op_error, log_op_start};

/// Output encoding of the diff
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Word stream with markers around changes
    Text,
    /// JSON report with statistics and every edit
    Json,
}

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Old file
    pub file1: PathBuf,

    /// New file
    pub file2: PathBuf,

    /// String to mark beginning of delete region
    #[arg(
        short = 'w',
        long,
        value_name = "STRING",
        env = "WDIFFER_START_DELETE",
        allow_hyphen_values = true
    )]
    pub start_delete: Option<String>,

    /// String to mark end of delete region
    #[arg(
        short = 'x',
        long,
        value_name = "STRING",
        env = "WDIFFER_END_DELETE",
        allow_hyphen_values = true
    )]
    pub end_delete: Option<String>,

    /// String to mark beginning of insert region
    #[arg(
        short = 'y',
        long,
        value_name = "STRING",
        env = "WDIFFER_START_INSERT",
        allow_hyphen_values = true
    )]
    pub start_insert: Option<String>,

    /// String to mark end of insert region
    #[arg(
        short = 'z',
        long,
        value_name = "STRING",
        env = "WDIFFER_END_INSERT",
        allow_hyphen_values = true
    )]
    pub end_insert: Option<String>,

    /// Colour deletions red and insertions green
    #[arg(long)]
    pub color: bool,

    /// Print word statistics to stderr
    #[arg(short, long)]
    pub statistics: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Run the LCS matrix over the whole input instead of the trimmed region
    #[arg(long)]
    pub no_trim: bool,

    /// Human-readable debug logging on stderr
    #[arg(short, long, conflicts_with = "log_json")]
    pub verbose: bool,

    /// JSON structured logging on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl DiffArgs {
    fn log_profile(&self) -> Option<Profile> {
        if self.verbose {
            Some(Profile::Development)
        } else if self.log_json {
            Some(Profile::Production)
        } else {
            None
        }
    }

    /// Resolve the marker configuration from flags and environment.
    fn markers(&self) -> Result<Markers> {
        let explicit = [
            &self.start_delete,
            &self.end_delete,
            &self.start_insert,
            &self.end_insert,
        ];
        let markers = if self.color {
            if explicit.iter().any(|m| m.is_some()) {
                return Err(WdiffError::invalid_configuration(
                    "--color cannot be combined with explicit markers",
                ));
            }
            Markers::ansi_color()
        } else {
            Markers {
                delete_start: self.start_delete.clone().unwrap_or_default(),
                delete_end: self.end_delete.clone().unwrap_or_default(),
                insert_start: self.start_insert.clone().unwrap_or_default(),
                insert_end: self.end_insert.clone().unwrap_or_default(),
            }
        };
        markers.validate()?;
        Ok(markers)
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> std::result::Result<(), Box<dyn std::error::Error>> {
    if let Some(profile) = args.log_profile() {
        init(profile);
    }

    log_op_start!(
        "word_diff",
        old = args.file1.display(),
        new = args.file2.display()
    );
    let start = Instant::now();

    let stats = run(&args).map_err(|e| {
        log_op_error!(
            "word_diff",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "word_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        edit_count = stats.edit_count()
    );

    Ok(())
}

fn run(args: &DiffArgs) -> Result<DiffStats> {
    let markers = args.markers()?;

    let old = tokenize_file(&args.file1)?;
    let new = tokenize_file(&args.file2)?;
    tracing::debug!(
        old_tokens = old.len(),
        new_tokens = new.len(),
        trim = !args.no_trim,
        "inputs tokenized"
    );

    let edits = compute_edits_with(&old, &new, DiffOptions { trim: !args.no_trim });
    let stats = DiffStats::from_edits(&edits);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Text => {
            let rendered: Vec<String> = edits.iter().map(|e| markers.render_edit(e)).collect();
            write_stream(&mut out, &rendered)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &DiffReport::new(edits))?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    if args.statistics {
        eprint!(
            "{}",
            render_statistics(
                &stats,
                &args.file1.display().to_string(),
                &args.file2.display().to_string()
            )
        );
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        diff: DiffArgs,
    }

    fn parse(args: &[&str]) -> DiffArgs {
        TestCli::try_parse_from(std::iter::once("wdiffer").chain(args.iter().copied()))
            .unwrap()
            .diff
    }

    #[test]
    fn test_short_marker_flags() {
        let args = parse(&["-w", "[-", "-x", "-]", "-y", "{+", "-z", "+}", "a", "b"]);
        let markers = args.markers().unwrap();
        assert_eq!(markers.delete_start, "[-");
        assert_eq!(markers.delete_end, "-]");
        assert_eq!(markers.insert_start, "{+");
        assert_eq!(markers.insert_end, "+}");
    }

    #[test]
    fn test_unset_markers_default_to_empty() {
        let args = parse(&["-y", "[+", "a", "b"]);
        let markers = args.markers().unwrap();
        assert_eq!(markers.insert_start, "[+");
        assert_eq!(markers.insert_end, "");
        assert_eq!(markers.delete_start, "");
    }

    #[test]
    fn test_color_with_explicit_marker_is_rejected() {
        let args = parse(&["--color", "-w", "[-", "a", "b"]);
        assert!(matches!(
            args.markers(),
            Err(WdiffError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_color_preset() {
        let args = parse(&["--color", "a", "b"]);
        assert_eq!(args.markers().unwrap(), Markers::ansi_color());
    }

    #[test]
    fn test_log_profile_selection() {
        assert_eq!(parse(&["a", "b"]).log_profile(), None);
        assert_eq!(parse(&["-v", "a", "b"]).log_profile(), Some(Profile::Development));
        assert_eq!(parse(&["--log-json", "a", "b"]).log_profile(), Some(Profile::Production));
    }

    #[test]
    fn test_verbose_conflicts_with_log_json() {
        let parsed = TestCli::try_parse_from(["wdiffer", "-v", "--log-json", "a", "b"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_second_file_is_usage_error() {
        assert!(TestCli::try_parse_from(["wdiffer", "a"]).is_err());
    }

    #[test]
    fn test_format_defaults_to_text() {
        let args = parse(&["a", "b"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.no_trim);
        assert_eq!(parse(&["--format", "json", "a", "b"]).format, OutputFormat::Json);
    }
}
