//! pdf-outline CLI - document outline inference tool

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdf_outline::render::{to_json, JsonFormat};
use pdf_outline::{
    FallbackPrimary, OutlineExtractor, OutlineOptions, OutlineReport, OutlineResult, Outliner,
};

#[derive(Parser)]
#[command(name = "pdf-outline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer a document outline (title and headings) from PDF or text", long_about = None)]
struct Cli {
    /// Input file (PDF or plain text)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    #[command(flatten)]
    outline: OutlineArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a PDF or text file
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print how the outline was produced to stderr
        #[arg(long)]
        report: bool,

        #[command(flatten)]
        outline: OutlineArgs,
    },

    /// Extract the outline of already-extracted text (stdin if no file)
    Text {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Print how the outline was produced to stderr
        #[arg(long)]
        report: bool,

        #[command(flatten)]
        outline: OutlineArgs,
    },

    /// Extract outlines of many files in parallel
    Batch {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        outline: OutlineArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args, Clone)]
struct OutlineArgs {
    /// Maximum number of outline entries (1 to 20)
    #[arg(long, env = "PDF_OUTLINE_MAX_ENTRIES", default_value = "20")]
    max_entries: usize,

    /// Assumed lines per page for page estimates
    #[arg(long, env = "PDF_OUTLINE_LINES_PER_PAGE", default_value = "50")]
    lines_per_page: usize,

    /// Which fallback line becomes H1 when no heading is found
    #[arg(long, value_enum, default_value = "first-inspected")]
    fallback: FallbackMode,

    /// Normalize text to Unicode NFC before classification
    #[arg(long)]
    nfc: bool,
}

impl OutlineArgs {
    fn to_options(&self) -> OutlineOptions {
        OutlineOptions::new()
            .with_max_entries(self.max_entries)
            .with_lines_per_page(self.lines_per_page)
            .with_fallback_primary(self.fallback.into())
            .with_unicode_normalization(self.nfc)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum FallbackMode {
    /// The first inspected line is H1, even if it is skipped
    FirstInspected,
    /// The first emitted candidate is H1
    FirstEmitted,
}

impl From<FallbackMode> for FallbackPrimary {
    fn from(mode: FallbackMode) -> Self {
        match mode {
            FallbackMode::FirstInspected => FallbackPrimary::FirstInspected,
            FallbackMode::FirstEmitted => FallbackPrimary::FirstEmitted,
        }
    }
}

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Extract {
            input,
            output,
            compact,
            report,
            outline,
        }) => cmd_extract(&input, output.as_deref(), compact, report, &outline),
        Some(Commands::Text {
            input,
            output,
            compact,
            report,
            outline,
        }) => cmd_text(input.as_deref(), output.as_deref(), compact, report, &outline),
        Some(Commands::Batch {
            inputs,
            output,
            compact,
            outline,
        }) => cmd_batch(&inputs, output.as_deref(), compact, &outline),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_extract(&input, None, cli.compact, false, &cli.outline)
            } else {
                println!("{}", "Usage: pdf-outline <FILE>".yellow());
                println!("       pdf-outline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        log::debug!("{}", e);
        eprintln!("{}: {}", "Error".red().bold(), user_message(e.as_ref()));
        std::process::exit(1);
    }
}

/// Map any failure to the generic user-facing message.
fn user_message(err: &(dyn std::error::Error + 'static)) -> &'static str {
    match err.downcast_ref::<pdf_outline::Error>() {
        Some(e) => e.user_message(),
        None => pdf_outline::error::USER_FACING_MESSAGE,
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn write_output(content: &str, output: Option<&Path>) -> CliResult<()> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_report(report: &OutlineReport) -> CliResult<()> {
    eprintln!("{}", "Outline Report".cyan().bold());
    eprintln!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn emit(
    result: &OutlineResult,
    report: Option<&OutlineReport>,
    output: Option<&Path>,
    compact: bool,
) -> CliResult<()> {
    if let Some(report) = report {
        print_report(report)?;
    }
    let json = to_json(result, json_format(compact))?;
    write_output(&json, output)
}

fn cmd_extract(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    report: bool,
    args: &OutlineArgs,
) -> CliResult<()> {
    let outliner = Outliner::new().with_options(args.to_options());
    let text = outliner.registry().extract_text(input)?;
    let (result, outline_report) = outliner.extractor().extract_with_report(&text);

    emit(&result, report.then_some(&outline_report), output, compact)
}

fn cmd_text(
    input: Option<&Path>,
    output: Option<&Path>,
    compact: bool,
    report: bool,
    args: &OutlineArgs,
) -> CliResult<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let extractor = OutlineExtractor::new(args.to_options());
    let (result, outline_report) = extractor.extract_with_report(&text);

    emit(&result, report.then_some(&outline_report), output, compact)
}

/// Output file name for a batch input: `<stem>.outline.json`.
fn batch_output_name(input: &Path) -> String {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    format!("{}.outline.json", stem)
}

fn cmd_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    compact: bool,
    args: &OutlineArgs,
) -> CliResult<()> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    pb.set_message("Extracting outlines...");

    let outliner = Outliner::new().with_options(args.to_options());
    let entries = pdf_outline::batch::extract_batch_with(
        inputs,
        outliner.registry(),
        &outliner.extractor(),
        |_| pb.inc(1),
    );

    pb.finish_with_message("Done!");

    let format = json_format(compact);
    let mut failed = 0;

    println!("\n{}", "Output files:".green().bold());
    for entry in &entries {
        match &entry.result {
            Ok(result) => {
                let name = batch_output_name(&entry.path);
                fs::write(output_dir.join(&name), to_json(result, format)?)?;
                println!("  {} {}", "├─".dimmed(), name);
            }
            Err(e) => {
                failed += 1;
                log::debug!("{}: {}", entry.path.display(), e);
                println!(
                    "  {} {} {}",
                    "├─".dimmed(),
                    entry.path.display(),
                    e.user_message().red()
                );
            }
        }
    }

    println!(
        "\n{} {} succeeded, {} failed",
        "Done!".green().bold(),
        entries.len() - failed,
        failed
    );

    Ok(())
}

fn cmd_version() {
    println!(
        "{} {}",
        "pdf-outline".cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Document outline inference tool");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_args() {
        let cli = Cli::try_parse_from([
            "pdf-outline",
            "extract",
            "report.pdf",
            "--compact",
            "--max-entries",
            "5",
            "--fallback",
            "first-emitted",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Extract {
                input,
                compact,
                outline,
                ..
            }) => {
                assert_eq!(input, PathBuf::from("report.pdf"));
                assert!(compact);
                let options = outline.to_options();
                assert_eq!(options.max_entries, 5);
                assert_eq!(options.fallback_primary, FallbackPrimary::FirstEmitted);
            }
            _ => panic!("expected extract command"),
        }
    }

    #[test]
    fn test_default_command_takes_outline_args() {
        let cli = Cli::try_parse_from([
            "pdf-outline",
            "report.pdf",
            "--max-entries",
            "7",
            "--lines-per-page",
            "40",
        ])
        .unwrap();

        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("report.pdf")));
        let options = cli.outline.to_options();
        assert_eq!(options.max_entries, 7);
        assert_eq!(options.lines_per_page, 40);
    }

    #[test]
    fn test_max_entries_flag_is_capped() {
        let cli =
            Cli::try_parse_from(["pdf-outline", "report.pdf", "--max-entries", "50"]).unwrap();
        assert_eq!(cli.outline.to_options().max_entries, 20);
    }

    #[test]
    fn test_batch_requires_inputs() {
        assert!(Cli::try_parse_from(["pdf-outline", "batch"]).is_err());
    }

    #[test]
    fn test_batch_output_name() {
        assert_eq!(
            batch_output_name(Path::new("docs/report.v2.pdf")),
            "report.v2.outline.json"
        );
    }

    #[test]
    fn test_user_message_for_foreign_errors() {
        let err: Box<dyn std::error::Error> = "disk full".into();
        assert_eq!(user_message(err.as_ref()), "Failed to parse PDF file");
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output("{}", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
