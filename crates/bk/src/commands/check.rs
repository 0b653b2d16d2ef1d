//! `bk check` command implementation.

use std::path::PathBuf;

use bk_config::Config;
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover bootkit.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref())?;

        match &config.config_path {
            Some(path) => output.highlight(&format!("Checked {}", path.display())),
            None => output.highlight("No bootkit.toml found"),
        }
        for line in summary(&config) {
            output.info(&line);
        }
        output.success(&format!("{} fragment(s) OK", config.len()));
        Ok(())
    }
}

/// One `kind name` line per fragment.
fn summary(config: &Config) -> Vec<String> {
    config
        .fragments()
        .map(|f| format!("  {:<10} {}", f.kind(), f.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_summary_lists_fragments_in_order() {
        let config = Config::from_toml(
            r#"
[[accordion]]
name = "faq"

[[nav]]
name = "main"
"#,
        )
        .unwrap();
        assert_eq!(
            summary(&config),
            vec![
                "  nav        main".to_owned(),
                "  accordion  faq".to_owned(),
            ]
        );
    }

    #[test]
    fn test_execute_with_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootkit.toml");
        std::fs::write(&path, "[[nav]]\nname = \"main\"\n").unwrap();

        let args = CheckArgs { config: Some(path) };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_execute_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bootkit.toml");
        std::fs::write(&path, "[[nav]]\nname = \"\"\n").unwrap();

        let args = CheckArgs { config: Some(path) };
        assert!(matches!(args.execute(), Err(CliError::Config(_))));
    }
}
