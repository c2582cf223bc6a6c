//! Validation problems found in `popchip.toml`.
//!
//! Every section reports into one [`ConfigDiagnostics`] so a single run shows
//! all problems instead of stopping at the first.

use super::ConfigError;
use crate::utils::plural::plural_count;
use owo_colors::OwoColorize;
use std::fmt;

/// A config key that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    SiteTitle,
    SiteUrl,
    SiteLanguage,
    BuildOutput,
    BuildAssets,
}

impl ConfigField {
    /// Dotted TOML key, as written in the file.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SiteTitle => "site.title",
            Self::SiteUrl => "site.url",
            Self::SiteLanguage => "site.language",
            Self::BuildOutput => "build.output",
            Self::BuildAssets => "build.assets",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub field: ConfigField,
    pub message: String,
    pub hint: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    problems: Vec<Problem>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: ConfigField, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: ConfigField,
        message: impl Into<String>,
        hint: &'static str,
    ) {
        self.push(field, message.into(), Some(hint));
    }

    fn push(&mut self, field: ConfigField, message: String, hint: Option<&'static str>) {
        self.problems.push(Problem {
            field,
            message,
            hint,
        });
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_result(self) -> Result<(), ConfigError> {
        if self.problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(self))
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format!("{} in config:", plural_count(self.problems.len(), "problem"))
                .red()
                .bold()
        )?;
        for problem in &self.problems {
            write!(f, "\n  {} {}", problem.field.key().cyan(), problem.message)?;
            if let Some(hint) = problem.hint {
                write!(f, "\n    {} {}", "hint:".yellow(), hint)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_problem() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(ConfigField::SiteTitle, "title must not be empty");
        diag.error_with_hint(ConfigField::BuildOutput, "must be relative", "e.g. \"public\"");

        let Err(ConfigError::Invalid(diag)) = diag.into_result() else {
            panic!("expected invalid config");
        };
        assert_eq!(diag.problems().len(), 2);
        assert_eq!(diag.problems()[1].field, ConfigField::BuildOutput);

        let shown = diag.to_string();
        assert!(shown.contains("2 problems"));
        assert!(shown.contains("site.title"));
        assert!(shown.contains("e.g. \"public\""));
    }

    #[test]
    fn test_empty_is_ok() {
        assert!(ConfigDiagnostics::new().into_result().is_ok());
    }
}
