//! Site configuration management for `popchip.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [site], [build], [serve]
//! ├── diagnostic.rs  # ConfigField, ConfigDiagnostics
//! ├── error.rs       # ConfigError
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A missing `popchip.toml` is not an error: every section has defaults that
//! render the shop's page as published. A file named with `--config` must
//! exist.

mod diagnostic;
mod error;
pub mod section;
mod util;

pub use diagnostic::{ConfigDiagnostics, ConfigField};
pub use error::ConfigError;

use section::{BuildSection, ServeSection, SiteSection};

use crate::{
    cli::{BuildArgs, Cli, Commands, DEFAULT_CONFIG},
    debug, log,
};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::{find_config_file, normalize_path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing popchip.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Project root directory (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub serve: ServeSection,
}

impl SiteConfig {
    /// Load configuration for the current working directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_in(cli, &cwd)
    }

    /// Load configuration, searching upward from `start` for the config file.
    ///
    /// The project root is the config file's directory, or `start` when no
    /// config file exists.
    pub fn load_in(cli: &Cli, start: &Path) -> Result<Self> {
        let (mut config, root) = match find_config_file(&cli.config, start) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
                config.config_path = Some(path);
                (config, root)
            }
            None if cli.config == Path::new(DEFAULT_CONFIG) => {
                debug!("config"; "{} not found, using defaults", DEFAULT_CONFIG);
                (Self::default(), start.to_path_buf())
            }
            None => return Err(ConfigError::NotFound(cli.config.clone()).into()),
        };

        config.apply_cli(cli);

        // Must run before normalization turns every path absolute
        let mut diag = ConfigDiagnostics::new();
        config.build.validate_paths(&mut diag);
        diag.into_result()?;

        config.normalize_paths(&root);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_cli(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                serve_args,
            } => {
                self.apply_build_args(build_args);
                Self::update_option(&mut self.serve.interface, serve_args.interface.as_ref());
                Self::update_option(&mut self.serve.port, serve_args.port.as_ref());
            }
            Commands::Menu { .. } | Commands::Validate { .. } => {}
        }
        Self::update_option(&mut self.build.output, cli.output.as_ref());
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean |= args.clean;
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // paths
    // ========================================================================

    fn normalize_paths(&mut self, root: &Path) {
        self.root = root.to_path_buf();
        self.build.output = normalize_path(root, &self.build.output);
        self.build.assets = normalize_path(root, &self.build.assets);
    }

    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        Ok(diag.into_result()?)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse config; panics on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
