pub mod commands;
pub mod console;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{CheckSummary, load_inputs, load_urls_from_file, run_checks};
