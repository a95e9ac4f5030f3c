//! Interview Report CLI

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use interview_report::config::{default_config_json, load_config, OutputFormat, CONFIG_FILENAME};
use interview_report::reporter::{
    ConsoleReporter, HtmlReporter, JsonReporter, MarkdownReporter, PdfReporter, TextReporter,
};
use interview_report::session::{load_session, STDIN_PATH};
use interview_report::ResultsView;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Interview Report: results summary for practice-interview sessions
#[derive(Parser, Debug)]
#[command(name = "interview-report")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Session JSON file ("-" reads stdin; omit when using a subcommand)
    #[arg(required = true)]
    session: Option<PathBuf>,

    /// Output format (default: console, or "format" from config)
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,

    /// Shorthand for --format json
    #[arg(long, short, conflicts_with_all = ["format", "html"])]
    json: bool,

    /// Shorthand for --format html
    #[arg(long, conflicts_with = "format")]
    html: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Minimum overall score (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Quiet mode (score and level only)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output
    #[arg(long, short)]
    verbose: bool,

    /// Start HTML question blocks expanded
    #[arg(long)]
    expand: bool,

    /// Path to config file (default: search .interviewrc.json next to the session and in parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .interviewrc.json with sensible defaults
    Init {
        /// Minimum overall score (e.g. 6)
        #[arg(long)]
        threshold: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let Some(session_path) = args.session.clone() else {
        anyhow::bail!("session path required when not using a subcommand");
    };

    let work_dir = if session_path == Path::new(STDIN_PATH) {
        std::env::current_dir().context("Failed to get current directory")?
    } else {
        session_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    let cli_format = if args.json {
        Some(OutputFormat::Json)
    } else if args.html {
        Some(OutputFormat::Html)
    } else {
        args.format
    };

    let (config, config_path) = load_config(&work_dir, args.config.as_deref())?;
    let config = config.merge_with_cli(args.threshold, cli_format, args.expand);
    if args.verbose {
        if let Some(ref path) = config_path {
            eprintln!("{}: Using config {}", "Info".blue(), path.display());
        }
    }

    let session = load_session(&session_path)
        .with_context(|| format!("Failed to load session: {}", session_path.display()))?;
    if session.questions.is_empty() {
        eprintln!("{}: Session has no questions", "Warning".yellow());
    } else if args.verbose {
        eprintln!(
            "{}: Loaded {} questions",
            "Info".blue(),
            session.questions.len()
        );
    }

    let view = ResultsView::new(session);
    let rendered = view.render(Local::now().date_naive());
    let stats = &rendered.stats;

    if args.quiet {
        ConsoleReporter::new().report_quiet(stats);
    } else {
        let report = match config.output_format() {
            OutputFormat::Console => {
                let mut reporter = ConsoleReporter::new();
                if args.verbose {
                    reporter = reporter.verbose();
                }
                if args.output.is_some() {
                    eprintln!(
                        "{}: --output is ignored for console format",
                        "Warning".yellow()
                    );
                }
                reporter.report(view.session(), stats);
                None
            }
            OutputFormat::Html => {
                let mut reporter = HtmlReporter::new().with_title(config.page_title());
                if config.expand_questions.unwrap_or(false) {
                    reporter = reporter.expanded();
                }
                Some(reporter.report(&rendered).into_bytes())
            }
            OutputFormat::Json => {
                let mut reporter = JsonReporter::new();
                if config.pretty_json.unwrap_or(false) {
                    reporter = reporter.pretty();
                }
                Some(reporter.report(view.session(), stats).into_bytes())
            }
            OutputFormat::Text => Some(
                TextReporter::new()
                    .report(view.session(), stats, Local::now().naive_local())
                    .into_bytes(),
            ),
            OutputFormat::Markdown => {
                Some(MarkdownReporter::new().report(view.session(), stats).into_bytes())
            }
            OutputFormat::Pdf => {
                if args.output.is_none() {
                    anyhow::bail!("PDF output requires --output <FILE>");
                }
                Some(PdfReporter::new().report(view.session(), stats, Local::now().naive_local())?)
            }
        };

        if let Some(report) = report {
            write_report(&report, args.output.as_deref())?;
            if let Some(ref out) = args.output {
                if args.verbose {
                    eprintln!("{}: Report written to {}", "Info".blue(), out.display());
                }
            }
        }
    }

    if let Some(threshold) = config.threshold {
        let score = stats.overall_score.value();
        if score < threshold {
            if !args.quiet {
                eprintln!(
                    "{}: Overall score {} is below threshold {}",
                    "Warning".yellow(),
                    stats.overall_score,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_report(report: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, report)
            .with_context(|| format!("Failed to write report: {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report).context("Failed to write report to stdout")?;
            if !report.ends_with(b"\n") {
                stdout.write_all(b"\n").context("Failed to write report to stdout")?;
            }
            Ok(())
        }
    }
}

fn run_init(threshold: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = default_config_json(threshold.unwrap_or(6.0));
    fs::write(&config_path, json)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    eprintln!("{}: Created {}", "Info".blue(), config_path.display());
    Ok(ExitCode::SUCCESS)
}
