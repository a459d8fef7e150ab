use clap::{arg, command};
use phishguard_client::DEFAULT_BASE_URL;
use std::path::PathBuf;

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("phishguard")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("phishguard")
        .styles(CLAP_STYLING)
        .arg(
            arg!(-q --"quiet" "Suppress banner and non-essential output")
                .required(false)
                .global(true),
        )
        .arg(
            arg!(--"api-url" <URL>)
                .required(false)
                .global(true)
                .help("Base URL of the classification service")
                .env("PHISHGUARD_API_URL")
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(
            arg!(-v --"verbose" ...)
                .required(false)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug). RUST_LOG overrides."),
        )
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about("Ask the classification service whether a URL is phishing")
                .arg(
                    arg!([URL])
                        .required(false)
                        .help("The URL to check. A missing http(s):// prefix becomes https://")
                        .conflicts_with("file"),
                )
                .arg(
                    arg!(-f --"file" <PATH>)
                        .required(false)
                        .help("Path to a newline-delimited file of URLs to check one after another")
                        .value_parser(clap::value_parser!(PathBuf))
                        .conflicts_with("URL"),
                )
                .arg(
                    arg!(--"format" <FORMAT>)
                        .required(false)
                        .help("Output format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"no-health")
                        .required(false)
                        .help("Skip the service health probe at startup")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(command!("health").about("Report whether the service is up and its model is loaded"))
        .subcommand(command!("model-info").about("Describe the model behind the service"))
        .subcommand(
            command!("ui")
                .about("Launch the interactive terminal form")
                .arg(
                    arg!(--"log-file" <PATH>)
                        .required(false)
                        .help("Write logs to this file (logs are discarded otherwise)")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}
