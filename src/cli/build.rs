//! Site building.
//!
//! Build phases:
//! - **Init** - Create (or wipe, with `--clean`) the output directory
//! - **Embed** - Write the hashed stylesheet and navigation script
//! - **Page** - Render `index.html` linking the embedded assets
//! - **Assets** - Copy static assets in parallel

use crate::{
    asset::{missing_required, process_asset, scan_assets},
    config::SiteConfig,
    core::stop_requested,
    embed::{self, AssetUrls},
    log,
    logger::ProgressLine,
    page::{self, PageContext},
    utils::{date::current_year, plural::plural_count},
};
use anyhow::{Context, Result, anyhow, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Rendered page, relative to the output directory.
const INDEX_FILE: &str = "index.html";

/// What a build wrote.
#[derive(Debug)]
pub struct BuildOutput {
    pub index: PathBuf,
    pub urls: AssetUrls,
    /// Static assets written this run (fresh copies are skipped).
    pub copied: usize,
}

/// Build the site into the configured output directory.
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildOutput> {
    let output = config.output_dir();
    init_output(config)?;

    let mut assets = scan_assets(&config.build.assets)?;
    let page = config.build.assets.join(INDEX_FILE);
    if let Some(pos) = assets.iter().position(|p| *p == page) {
        assets.remove(pos);
        log!("warning"; "skipping {}: the rendered page is written there", page.display());
    }
    let missing = missing_required(&config.build.assets);
    if !missing.is_empty() {
        log!(
            "warning";
            "{} missing from {}: {}",
            plural_count(missing.len(), "required asset"),
            config.build.assets.display(),
            missing.join(", ")
        );
    }

    let progress = (!quiet).then(|| {
        ProgressLine::new(&[("embed", 2), ("page", 1), ("assets", assets.len())])
    });

    let urls = embed::write_embedded_assets(config, output)
        .context("Failed to write embedded assets")?;
    if let Some(p) = &progress {
        p.inc("embed");
        p.inc("embed");
    }

    let index = write_index(config, &urls)?;
    if let Some(p) = &progress {
        p.inc("page");
    }

    let copied = process_assets(&assets, config, progress.as_ref())?;

    if let Some(p) = progress {
        p.finish();
    }

    if !quiet {
        log!(
            "build"; "{} -> {} ({} copied)",
            config.site.title,
            output.display(),
            plural_count(copied, "asset")
        );
    }

    Ok(BuildOutput {
        index,
        urls,
        copied,
    })
}

/// Create the output directory, wiping it first when `clean` is set.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = config.output_dir();

    if config.build.clean && output.exists() {
        let resolved = output
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", output.display()))?;
        if contains_project(config, &resolved) {
            bail!(
                "refusing to clean {}: it contains the project root",
                output.display()
            );
        }
        fs::remove_dir_all(&resolved)
            .with_context(|| format!("Failed to clean {}", output.display()))?;
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create {}", output.display()))
}

/// Whether wiping `dir` (already resolved) would delete the project.
fn contains_project(config: &SiteConfig, dir: &Path) -> bool {
    let root = if config.root.as_os_str().is_empty() {
        Path::new(".")
    } else {
        config.root.as_path()
    };
    root.canonicalize()
        .is_ok_and(|root| root.starts_with(dir))
}

/// Render the page and write `index.html`.
fn write_index(config: &SiteConfig, urls: &AssetUrls) -> Result<PathBuf> {
    let ctx = PageContext {
        site: &config.site,
        stylesheet: &urls.stylesheet,
        script: &urls.script,
        year: current_year(),
    };
    let html = page::render(&ctx).into_string();

    let path = config.output_dir().join(INDEX_FILE);
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

/// Copy asset files in parallel, stopping at the first failure.
fn process_assets(
    files: &[PathBuf],
    config: &SiteConfig,
    progress: Option<&ProgressLine>,
) -> Result<usize> {
    let root: &Path = &config.build.assets;
    let output = config.output_dir();
    let has_error = AtomicBool::new(false);
    let copied = AtomicUsize::new(0);

    files.par_iter().try_for_each(|path| {
        if stop_requested() || has_error.load(Ordering::Relaxed) {
            return Err(anyhow!("Aborted"));
        }
        match process_asset(path, root, output, config.build.clean, config.build.minify) {
            Ok(written) => {
                if written {
                    copied.fetch_add(1, Ordering::Relaxed);
                }
            }
            Err(e) => {
                if !has_error.swap(true, Ordering::Relaxed) {
                    log!("error"; "{}: {:#}", path.display(), e);
                }
                return Err(anyhow!("Build failed"));
            }
        }
        if let Some(p) = progress {
            p.inc("assets");
        }
        Ok(())
    })?;

    Ok(copied.into_inner())
}
