//! Theme preference command.

use anyhow::Result;

use crate::config::{Config, Theme};
use crate::output::Output;

/// Print the saved theme, or persist a new choice.
pub fn run_theme(choice: Option<Theme>) -> Result<()> {
    let out = Output::new();
    let mut config = Config::load()?;

    match choice {
        Some(theme) => {
            config.ui.theme = Some(theme);
            config.save()?;
            out.success(format!("Theme set to {theme}"));
        }
        None => {
            out.print(config.ui.theme.unwrap_or_default());
        }
    }

    Ok(())
}
