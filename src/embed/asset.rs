//! Embedded assets written with content-hash file names.
//!
//! An asset named `nav` of kind JavaScript is written as `nav-<hash>.js`,
//! where `<hash>` is the fingerprint of the bytes actually written. Earlier
//! copies (`nav-*.js`) are removed with [`EmbeddedAsset::cleanup_old`].

use super::{Template, TemplateVars, unfilled};
use crate::asset::minify;
use crate::{debug, utils::hash};
use anyhow::{Context, Result};
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Css,
    JavaScript,
}

impl AssetKind {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::JavaScript => "js",
        }
    }

    fn minify(self, source: &str) -> Option<String> {
        match self {
            Self::Css => minify::minify_css(source),
            Self::JavaScript => minify::minify_js(source),
        }
    }
}

/// A compiled-in asset template.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAsset<V> {
    kind: AssetKind,
    name: &'static str,
    template: Template<V>,
}

impl<V: TemplateVars> EmbeddedAsset<V> {
    pub const fn new(kind: AssetKind, name: &'static str, content: &'static str) -> Self {
        Self {
            kind,
            name,
            template: Template::new(content),
        }
    }

    /// File name for the given final content.
    pub fn filename(&self, content: &str) -> String {
        format!(
            "{}-{}.{}",
            self.name,
            hash::fingerprint(content),
            self.kind.extension()
        )
    }

    /// Whether `file_name` is some version of this asset.
    fn is_version(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(self.name)
            .and_then(|rest| rest.strip_prefix('-'))
            .and_then(|rest| rest.strip_suffix(self.kind.extension()))
            .and_then(|rest| rest.strip_suffix('.'))
            .is_some_and(|hash| !hash.is_empty() && hash.bytes().all(|b| b.is_ascii_hexdigit()))
    }

    /// Remove every previously written version of this asset.
    ///
    /// Returns the number of files removed.
    pub fn cleanup_old(&self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if self.is_version(name) && entry.path().is_file() {
                fs::remove_file(entry.path())
                    .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Render the template, minified when requested.
    ///
    /// Minification failure keeps the readable source.
    pub fn render(&self, vars: &V, minify: bool) -> String {
        let source = self.template.render(vars);
        let missing = unfilled(&source);
        if !missing.is_empty() {
            debug!("build"; "{}: unfilled placeholders {:?}", self.name, missing);
        }
        if !minify {
            return source;
        }
        match self.kind.minify(&source) {
            Some(min) => min,
            None => {
                debug!("build"; "could not minify {}, keeping source", self.name);
                source
            }
        }
    }

    /// Write the asset into `dir` and return its URL path.
    pub fn write_with_vars(&self, dir: &Path, vars: &V, minify: bool) -> Result<String> {
        let content = self.render(vars, minify);
        let filename = self.filename(&content);
        let path = dir.join(&filename);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(format!("/{filename}"))
    }
}
