use colored::Colorize;
use phishguard::commands::command_argument_builder;
use phishguard::handlers::{
    handle_check, handle_health, handle_model_info, handle_ui, init_tracing, resolve_config,
    shows_banner, ui_log_writer,
};
use phishguard_core::print_banner;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");
    let verbosity = chosen_command.get_count("verbose");

    if shows_banner(&chosen_command) {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let config = match resolve_config(&chosen_command) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    match chosen_command.subcommand() {
        Some(("check", primary_command)) => {
            init_tracing(verbosity, None);
            match handle_check(primary_command, config, quiet).await {
                Ok(summary) if summary.failed > 0 => std::process::exit(1),
                Ok(_) => {}
                Err(e) => fail(e),
            }
        }
        Some(("health", _)) => {
            init_tracing(verbosity, None);
            if let Err(e) = handle_health(config).await {
                fail(e);
            }
        }
        Some(("model-info", _)) => {
            init_tracing(verbosity, None);
            if let Err(e) = handle_model_info(config).await {
                fail(e);
            }
        }
        Some(("ui", primary_command)) => {
            match ui_log_writer(primary_command.get_one::<PathBuf>("log-file")) {
                Ok(writer) => init_tracing(verbosity, Some(writer)),
                Err(e) => fail(e),
            }
            if let Err(e) = handle_ui(config).await {
                fail(e);
            }
        }
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn fail(e: anyhow::Error) -> ! {
    eprintln!("{} {:#}", "✗".red().bold(), e);
    std::process::exit(1);
}
