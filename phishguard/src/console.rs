// Console front ends for the submission controller

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use phishguard_core::{ResultDisplay, SubmissionView, Variant};
use std::time::Duration;

/// Human-readable output: spinner while loading, a colored verdict block.
pub struct ConsoleView {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ConsoleView {
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }
}

impl SubmissionView for ConsoleView {
    fn set_input(&mut self, value: &str) {
        if !self.quiet {
            println!("{} {}", "→".blue(), value.bright_white());
        }
    }

    fn show_loading(&mut self, url: &str) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message(format!("Analyzing {}...", url));
        self.spinner = Some(spinner);
    }

    fn hide_loading(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn show_result(&mut self, result: &ResultDisplay) {
        print!("{}", format_result_text(result));
    }

    fn show_error(&mut self, message: &str) {
        let line = format!("{} {}", "✗".red().bold(), message.red());
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    fn reset(&mut self) {
        self.hide_loading();
    }
}

/// One JSON object per line, for scripting.
#[derive(Default)]
pub struct JsonView {
    current: Option<String>,
    last_line: Option<String>,
}

impl JsonView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent line written to stdout.
    pub fn last_line(&self) -> Option<&str> {
        self.last_line.as_deref()
    }

    fn emit(&mut self, line: String) {
        println!("{}", line);
        self.last_line = Some(line);
    }
}

impl SubmissionView for JsonView {
    fn set_input(&mut self, value: &str) {
        self.current = Some(value.to_string());
    }

    fn show_loading(&mut self, _url: &str) {}

    fn hide_loading(&mut self) {}

    fn show_result(&mut self, result: &ResultDisplay) {
        self.emit(format_result_json(result));
    }

    fn show_error(&mut self, message: &str) {
        let line = format_error_json(self.current.as_deref(), message);
        self.emit(line);
    }

    fn show_rejected(&mut self, input: &str, message: &str) {
        self.emit(format_error_json(Some(input), message));
    }

    fn reset(&mut self) {
        self.current = None;
    }
}

pub fn format_result_text(result: &ResultDisplay) -> String {
    let (icon, title) = match result.variant {
        Variant::Danger => ("⚠".red().bold(), result.title.red().bold()),
        Variant::Safe => ("✓".green().bold(), result.title.green().bold()),
    };
    let risk = match result.risk_level.as_str() {
        "high" => result.risk_label.red().bold(),
        "medium" => result.risk_label.yellow().bold(),
        "low" => result.risk_label.green().bold(),
        _ => result.risk_label.normal().bold(),
    };

    let mut report = String::new();
    report.push_str(&format!("\n{}\n", "═".repeat(60).bright_blue()));
    report.push_str(&format!("  {} {}\n", icon, title));
    report.push_str(&format!("{}\n\n", "═".repeat(60).bright_blue()));
    report.push_str(&format!("  {} {}\n", "URL:".blue(), result.url.bright_white()));
    report.push_str(&format!("  {}\n\n", result.message));
    report.push_str(&format!("  {} {}\n", "Confidence:".blue(), result.confidence.bold()));
    report.push_str(&format!("  {} {}\n\n", "Risk Level:".blue(), risk));
    report
}

pub fn format_result_json(result: &ResultDisplay) -> String {
    serde_json::json!({
        "url": result.url,
        "phishing": result.is_phishing(),
        "title": result.title,
        "message": result.message,
        "confidence": result.confidence,
        "risk_level": result.risk_label,
    })
    .to_string()
}

pub fn format_error_json(url: Option<&str>, message: &str) -> String {
    serde_json::json!({ "url": url, "error": message }).to_string()
}
