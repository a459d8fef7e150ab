pub mod controller;
pub mod error;
pub mod health;
pub mod render;
pub mod state;
pub mod validate;
pub mod view;

use colored::Colorize;

pub use controller::SubmissionController;
pub use error::{SubmissionError, ValidationError};
pub use health::{HealthOutcome, check_health, spawn_health_check};
pub use render::{ResultDisplay, Variant};
pub use state::SubmissionState;
pub use validate::normalize_and_validate;
pub use view::SubmissionView;

pub const BANNER: &str = r#"
    ╔═══════════════════════════════════════════════╗
    ║   ___ _    _    _    ___                   _  ║
    ║  | _ \ |_ (_)__| |_ / __|_  _ __ _ _ _ __| |  ║
    ║  |  _/ ' \| (_-< ' \ (_ | || / _` | '_/ _` |  ║
    ║  |_| |_||_|_/__/_||_\___|\_,_\__,_|_| \__,_|  ║
    ║                                               ║
    ║         URL phishing verdicts on demand       ║
    ╚═══════════════════════════════════════════════╝
"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_cyan());
    println!(
        "  {} {}\n",
        "version".bright_black(),
        env!("CARGO_PKG_VERSION").bright_white()
    );
}
