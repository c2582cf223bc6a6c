//! Validation report types and formatting.

use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural::plural_s;

/// A single validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// The id, link or path that failed.
    pub target: String,
    pub reason: String,
}

/// Problems found in the rendered page, by kind.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Anchor contract: section ids, their order, in-page links.
    pub anchors: Vec<Issue>,
    /// Local files referenced by the page but absent from the output.
    pub assets: Vec<Issue>,
}

impl ValidationReport {
    pub fn add_anchor(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.anchors.push(Issue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn add_asset(&mut self, target: impl Into<String>, reason: impl Into<String>) {
        self.assets.push(Issue {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.anchors.len() + self.assets.len()
    }

    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Print the full report to stderr (anchors -> assets).
    pub fn print(&self) {
        print_section("anchors", &self.anchors);
        print_section("assets", &self.assets);
    }
}

fn print_section(name: &str, issues: &[Issue]) {
    if issues.is_empty() {
        return;
    }
    eprintln!();
    eprintln!(
        "{} {}",
        name.red().bold(),
        format!("({} error{})", issues.len(), plural_s(issues.len())).dimmed()
    );
    for issue in issues {
        eprintln!("{} {} {}", "→".red(), issue.target, issue.reason.dimmed());
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            write!(f, "{}", "all checks passed".green())
        } else {
            write!(
                f,
                "{} {} {}",
                "found".dimmed(),
                total.to_string().red().bold(),
                format!("error{}", plural_s(total)).dimmed()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = ValidationReport::default();
        assert!(report.is_clean());
        report.add_anchor("#menu", "missing");
        report.add_asset("/logo.png", "not found");
        report.add_asset("/favicon.ico", "not found");
        assert_eq!(report.error_count(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_summary_text() {
        let mut report = ValidationReport::default();
        assert!(report.to_string().contains("all checks passed"));
        report.add_anchor("#x", "no element with this id");
        assert!(report.to_string().contains("error"));
    }
}
