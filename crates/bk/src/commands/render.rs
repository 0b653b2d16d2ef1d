//! `bk render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use bk_config::Config;
use clap::Args;

use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Fragment to render (default: all fragments).
    name: Option<String>,

    /// Path to configuration file (default: auto-discover bootkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the fragment is unknown, or
    /// writing to stdout fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = Config::load(self.config.as_deref())?;
        let html = render_html(&config, self.name.as_deref())?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// Render the named fragment, or every fragment one per line.
fn render_html(config: &Config, name: Option<&str>) -> Result<String, CliError> {
    if let Some(name) = name {
        let fragment = config
            .fragment(name)
            .ok_or_else(|| CliError::UnknownFragment(name.to_owned()))?;
        return Ok(format!("{}\n", fragment.render().to_html()));
    }

    let mut html = String::new();
    for fragment in config.fragments() {
        tracing::debug!(
            name = fragment.name(),
            kind = fragment.kind(),
            "Rendering fragment"
        );
        html.push_str(&fragment.render().to_html());
        html.push('\n');
    }
    Ok(html)
}
