//! `validate` command: check the rendered page's anchor contract.
//!
//! Checks, on `index.html` in the output directory:
//! - each section id (`hero`, `menu`, `about`, `contact`) exists exactly once,
//!   in that vertical order
//! - no other id is duplicated
//! - every `href="#x"` targets an existing id
//! - every site-root `src`/`href` exists in the output directory

mod report;
mod scan;

use std::path::{Path, PathBuf};

use anyhow::Result;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::log;
use crate::page::Section;

pub use report::{Issue, ValidationReport};
use scan::{PageScan, scan_page};

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("no rendered page at {0} (run `popchip build` first)")]
    MissingPage(PathBuf),

    #[error("failed to read {0}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    Parse(PathBuf, String),

    #[error("validation failed with {0} error(s)")]
    Failed(usize),
}

/// Run the `validate` command against the configured output directory.
pub fn validate_site(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let index = config.output_dir().join("index.html");
    log!("validate"; "{}", index.display());

    let report = validate_output(config.output_dir())?;
    report.print();
    log!("validate"; "{}", report);

    if !report.is_clean() && !args.warn_only {
        return Err(ValidateError::Failed(report.error_count()).into());
    }
    Ok(())
}

/// Validate `index.html` under `output`.
pub fn validate_output(output: &Path) -> Result<ValidationReport, ValidateError> {
    let index = output.join("index.html");
    if !index.is_file() {
        return Err(ValidateError::MissingPage(index));
    }
    let html = std::fs::read_to_string(&index).map_err(|e| ValidateError::Io(index.clone(), e))?;
    let scan = scan_page(&html).map_err(|e| ValidateError::Parse(index.clone(), e))?;

    let mut report = ValidationReport::default();
    check_anchors(&scan, &mut report);
    check_assets(&scan, output, &mut report);
    Ok(report)
}

fn check_anchors(scan: &PageScan, report: &mut ValidationReport) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for id in &scan.ids {
        *counts.entry(id.as_str()).or_default() += 1;
    }

    // Section ids: present once, in vertical order
    let mut last: Option<(Section, usize)> = None;
    for section in Section::ORDER {
        let id = section.id();
        match counts.get(id).copied().unwrap_or(0) {
            0 => report.add_anchor(section.href(), "section is missing"),
            1 => {}
            n => report.add_anchor(section.href(), format!("section appears {n} times")),
        }

        let Some(position) = scan.ids.iter().position(|x| x == id) else {
            continue;
        };
        if let Some((prev, prev_position)) = last
            && position < prev_position
        {
            report.add_anchor(
                section.href(),
                format!("comes before {} in the page", prev.href()),
            );
        }
        last = Some((section, position));
    }

    // Any other duplicated id, reported once, in first-seen order
    let mut reported = Vec::new();
    for id in &scan.ids {
        let is_section = Section::ORDER.iter().any(|s| s.id() == id);
        if !is_section && counts[id.as_str()] > 1 && !reported.contains(&id) {
            report.add_anchor(format!("#{id}"), format!("id appears {} times", counts[id.as_str()]));
            reported.push(id);
        }
    }

    // In-page links; a bare `#` means the top of the page
    let mut seen = Vec::new();
    for fragment in &scan.fragments {
        if fragment.is_empty() || counts.contains_key(fragment.as_str()) || seen.contains(&fragment)
        {
            continue;
        }
        report.add_anchor(format!("#{fragment}"), "no element with this id");
        seen.push(fragment);
    }
}

fn check_assets(scan: &PageScan, output: &Path, report: &mut ValidationReport) {
    let mut seen = Vec::new();
    for rel in &scan.local_refs {
        if seen.contains(&rel) {
            continue;
        }
        seen.push(rel);

        let path = output.join(rel);
        let found = path.is_file() || path.join("index.html").is_file();
        if !found {
            report.add_asset(format!("/{rel}"), "not found in output");
        }
    }
}
