use crate::console::{ConsoleView, JsonView};
use anyhow::{Context, bail};
use clap::ArgMatches;
use colored::Colorize;
use phishguard_client::{ClassificationService, HttpClassifier, ServiceConfig};
use phishguard_core::{HealthOutcome, SubmissionController, SubmissionView, check_health, spawn_health_check};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Tally of a `check` run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    pub checked: usize,
    pub phishing: usize,
    pub failed: usize,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `-v`. Without a writer, logs go to stderr.
pub fn init_tracing(verbosity: u8, writer: Option<BoxMakeWriter>) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);
    let result = match writer {
        Some(writer) => builder.with_writer(writer).with_ansi(false).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };
    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}

/// Writer for `ui` mode: a log file when given, otherwise nowhere, so the
/// alternate screen stays clean.
pub fn ui_log_writer(log_file: Option<&PathBuf>) -> anyhow::Result<BoxMakeWriter> {
    match log_file {
        Some(path) => {
            let file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::sink)),
    }
}

/// The banner goes to stdout, so it is skipped for `--quiet` and for
/// `check --format json`.
pub fn shows_banner(args: &ArgMatches) -> bool {
    if args.get_flag("quiet") {
        return false;
    }
    match args.subcommand() {
        Some(("check", check)) => check.get_one::<String>("format").map(String::as_str) != Some("json"),
        _ => true,
    }
}

pub fn resolve_config(args: &ArgMatches) -> anyhow::Result<ServiceConfig> {
    let base_url = args
        .get_one::<String>("api-url")
        .map(String::as_str)
        .unwrap_or(phishguard_client::DEFAULT_BASE_URL);
    let config = ServiceConfig::new(base_url)?;
    debug!("Using classification service at {}", config.base_url());
    Ok(config)
}

/// Inputs for `check`: the positional URL or every entry of a file.
pub fn load_inputs(url: Option<&String>, file: Option<&PathBuf>) -> Result<Vec<String>, String> {
    if let Some(path) = file {
        load_urls_from_file(path)
    } else if let Some(url) = url {
        Ok(vec![url.clone()])
    } else {
        Err("Either a URL or --file must be provided".to_string())
    }
}

/// Read one input per line, skipping blank lines and `#` comments.
///
/// Entries are not validated here; the controller rejects bad ones.
pub fn load_urls_from_file(path: &Path) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read URL file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if urls.is_empty() {
        return Err(format!("No URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Submit every input in turn through one controller, resetting between
/// submissions.
pub async fn run_checks<S, V>(
    controller: &mut SubmissionController<S, V>,
    inputs: &[String],
) -> CheckSummary
where
    S: ClassificationService + ?Sized,
    V: SubmissionView,
{
    let mut summary = CheckSummary::default();

    for (i, input) in inputs.iter().enumerate() {
        if i > 0 {
            controller.reset();
        }
        match controller.submit(input).await {
            Ok(display) => {
                summary.checked += 1;
                if display.is_phishing() {
                    summary.phishing += 1;
                }
            }
            Err(_) => summary.failed += 1,
        }
    }

    summary
}

pub async fn handle_check(args: &ArgMatches, config: ServiceConfig, quiet: bool) -> anyhow::Result<CheckSummary> {
    let inputs = load_inputs(args.get_one::<String>("URL"), args.get_one::<PathBuf>("file"))
        .map_err(anyhow::Error::msg)?;
    let json = args.get_one::<String>("format").map(String::as_str) == Some("json");

    let service = Arc::new(HttpClassifier::new(config)?);
    let health = if args.get_flag("no-health") {
        None
    } else {
        Some(spawn_health_check(Arc::clone(&service)))
    };

    let view: Box<dyn SubmissionView> = if json {
        Box::new(JsonView::new())
    } else {
        Box::new(ConsoleView::new(quiet))
    };
    let mut controller = SubmissionController::new(service, view);

    info!("Checking {} URL(s)", inputs.len());
    let summary = run_checks(&mut controller, &inputs).await;

    if let Some(health) = health
        && !health.is_finished()
    {
        health.abort();
    }

    if inputs.len() > 1 && !json && !quiet {
        print_summary(&summary);
    }

    Ok(summary)
}

fn print_summary(summary: &CheckSummary) {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!(
        "  {} checked, {} phishing, {} failed",
        summary.checked.to_string().bright_white(),
        summary.phishing.to_string().red().bold(),
        summary.failed.to_string().yellow()
    );
    println!("{}", "═".repeat(60).bright_blue().bold());
}

pub async fn handle_health(config: ServiceConfig) -> anyhow::Result<HealthOutcome> {
    let base_url = config.base_url().to_string();
    let service = HttpClassifier::new(config)?;
    let outcome = check_health(&service).await;

    match &outcome {
        HealthOutcome::Ready => {
            println!("{} Service at {} is up, model loaded", "✓".green().bold(), base_url.bright_white());
        }
        HealthOutcome::ModelNotLoaded => {
            println!("{} Service at {} is up, but its model is not loaded", "⚠".yellow().bold(), base_url.bright_white());
            println!("  {} Train the model before submitting URLs", "ℹ".blue());
        }
        HealthOutcome::Unreachable(reason) => {
            bail!("Could not reach {}: {}", base_url, reason);
        }
    }

    Ok(outcome)
}

pub async fn handle_model_info(config: ServiceConfig) -> anyhow::Result<()> {
    let service = HttpClassifier::new(config)?;
    let info = service.model_info().await.context("Failed to fetch model info")?;

    println!("{}", "MODEL".bright_blue().bold());
    println!("  {} {}", "Type:".blue(), info.model_type.bright_white());
    println!("  {} {}", "Features:".blue(), info.num_features.to_string().cyan());
    if !info.description.is_empty() {
        println!("  {}", info.description);
    }
    if !info.features.is_empty() {
        println!();
        for feature in &info.features {
            println!("  {} {}", "•".blue(), feature);
        }
    }
    Ok(())
}

pub async fn handle_ui(config: ServiceConfig) -> anyhow::Result<()> {
    let service = Arc::new(HttpClassifier::new(config)?);
    // Fire and forget; the outcome only reaches the log.
    drop(spawn_health_check(Arc::clone(&service)));

    let runtime = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || phishguard_tui::run(service, runtime))
        .await
        .context("Terminal form task failed")??;
    Ok(())
}
