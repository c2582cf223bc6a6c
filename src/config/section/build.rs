//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"    # Rendered site
//! assets = "assets"    # Static files copied verbatim (logo.png, favicon.ico)
//! minify = true        # Minify embedded CSS and JS
//! clean = false        # Remove the output directory before building
//! ```

use crate::config::{ConfigDiagnostics, ConfigField};
use serde::Deserialize;
use std::path::{Component, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Output directory (relative to the project root).
    pub output: PathBuf,

    /// Static asset directory (relative to the project root).
    pub assets: PathBuf,

    /// Minify embedded CSS and JS.
    pub minify: bool,

    /// Remove the output directory before building.
    pub clean: bool,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            output: "public".into(),
            assets: "assets".into(),
            minify: true,
            clean: false,
        }
    }
}

impl BuildSection {
    /// Paths must stay inside the project; checked before they are joined to
    /// the root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (ConfigField::BuildOutput, &self.output),
            (ConfigField::BuildAssets, &self.assets),
        ] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("'{}' must be relative to the project root", path.display()),
                    "e.g. \"public\"",
                );
            } else if path.components().any(|c| matches!(c, Component::ParentDir)) {
                diag.error_with_hint(
                    field,
                    format!("'{}' must not leave the project root", path.display()),
                    "remove the `..` components",
                );
            } else if path.as_os_str().is_empty() {
                diag.error(field, "path must not be empty");
            }
        }
    }
}
