//! Command implementations for the QRfoundry CLI.

pub mod completions;
pub mod generate;
pub mod theme;

pub use completions::generate_completions;
pub use generate::{build_request, run_generate};
pub use theme::run_theme;
