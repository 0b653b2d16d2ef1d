//! Fragment catalog configuration for bootkit.
//!
//! Parses `bootkit.toml` files with serde and provides auto-discovery of the
//! config file in parent directories. Each `[[nav]]`, `[[dropdown]]` and
//! `[[accordion]]` table declares a named fragment; omitted fields take the
//! component defaults.
//!
//! ```toml
//! [[nav]]
//! name = "main"
//! variant = "tabs"
//!
//! [[nav.items]]
//! id = "home"
//! label = "Home"
//! href = "${SITE_URL:-}/"
//! active = true
//!
//! [[accordion]]
//! name = "faq"
//! id = "faq"
//! default_open = -1
//!
//! [[accordion.sections]]
//! title = "What is it?"
//! content = { html = "<p>A component layer.</p>" }
//! ```
//!
//! ## Environment Variable Expansion
//!
//! Link targets (`href`) support `${VAR}` and `${VAR:-default}`.

mod expand;
mod fragment;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use fragment::{AccordionFragment, DropdownFragment, Fragment, NavFragment};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "bootkit.toml";

/// Loaded fragment catalog.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub nav: Vec<NavFragment>,
    pub dropdown: Vec<DropdownFragment>,
    pub accordion: Vec<AccordionFragment>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`nav.main.items.home.href`").
        field: String,
        /// Error message.
        message: String,
    },
}

impl Config {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `bootkit.toml` in the current directory and its parents, falling
    /// back to an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, or if parsing,
    /// expansion or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_from(&cwd));
        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using empty catalog");
                Ok(Self::default())
            }
        }
    }

    /// Parse, expand and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            fragments = config.len(),
            "Loaded fragment catalog"
        );
        Ok(config)
    }

    /// All fragments in declaration order: navs, dropdowns, then accordions.
    pub fn fragments(&self) -> impl Iterator<Item = Fragment<'_>> {
        self.nav
            .iter()
            .map(Fragment::Nav)
            .chain(self.dropdown.iter().map(Fragment::Dropdown))
            .chain(self.accordion.iter().map(Fragment::Accordion))
    }

    /// Fragment named `name`.
    pub fn fragment(&self, name: &str) -> Option<Fragment<'_>> {
        self.fragments().find(|f| f.name() == name)
    }

    pub fn len(&self) -> usize {
        self.nav.len() + self.dropdown.len() + self.accordion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for fragment in self.fragments() {
            let name = fragment.name();
            if name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{} fragment name cannot be empty",
                    fragment.kind()
                )));
            }
            if !names.insert(name) {
                return Err(ConfigError::Validation(format!(
                    "duplicate fragment name: {name}"
                )));
            }
        }

        for nav in &self.nav {
            if let Some(index) = nav.items.iter().position(|item| item.id.is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "nav.{}.items[{index}].id cannot be empty",
                    nav.name
                )));
            }
        }

        for accordion in &self.accordion {
            let id = &accordion.options.id;
            if id.is_empty() || id.chars().any(char::is_whitespace) {
                return Err(ConfigError::Validation(format!(
                    "accordion.{}.id must be non-empty and contain no whitespace",
                    accordion.name
                )));
            }
        }

        Ok(())
    }

    /// Expand environment variable references in link targets.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for nav in &mut self.nav {
            for item in &mut nav.items {
                let field = format!("nav.{}.items.{}.href", nav.name, item.id);
                expand::expand_opt(&mut item.href, &field)?;
                for (index, entry) in item.dropdown.iter_mut().flatten().enumerate() {
                    let field = format!(
                        "nav.{}.items.{}.dropdown[{index}].href",
                        nav.name, item.id
                    );
                    expand::expand_opt(&mut entry.href, &field)?;
                }
            }
        }

        for dropdown in &mut self.dropdown {
            for (index, entry) in dropdown.entries.iter_mut().enumerate() {
                let field = format!("dropdown.{}.entries[{index}].href", dropdown.name);
                expand::expand_opt(&mut entry.href, &field)?;
            }
        }

        Ok(())
    }
}

/// Search for the config file in `start` and its parents.
fn discover_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.exists())
}
