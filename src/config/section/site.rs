//! `[site]` section configuration.
//!
//! Document metadata rendered into the page `<head>`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "The Pop and Chip Shop | Homemade Baked Goodies"
//! url = "https://popandchipshop.in"
//! language = "en"
//! ```

use crate::config::{ConfigDiagnostics, ConfigField};
use serde::Deserialize;

/// Site metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Page title.
    pub title: String,

    /// Meta description and social preview text.
    pub description: String,

    /// Canonical site URL (e.g., "https://popandchipshop.in").
    pub url: Option<String>,

    /// Language code for `<html lang>`.
    pub language: String,

    /// Author meta tag.
    pub author: String,

    /// Keywords meta tag.
    pub keywords: Vec<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "The Pop and Chip Shop | Homemade Baked Goodies".into(),
            description: "Delicious homemade cookies, muffins, cake pops, loaf cakes and more! \
                Freshly baked with love in Bangalore. Order your favorite treats today!"
                .into(),
            url: Some("https://popandchipshop.in".into()),
            language: "en".into(),
            author: crate::content::OWNER.into(),
            keywords: [
                "bakery",
                "homemade cookies",
                "cake pops",
                "muffins",
                "bangalore bakery",
                "home bakery",
                "fresh baked goods",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl SiteSection {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` and `language` are not empty
    /// - `url`, if set, is an http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(ConfigField::SiteTitle, "title must not be empty");
        }
        if self.language.trim().is_empty() {
            diag.error_with_hint(ConfigField::SiteLanguage, "language must not be empty", "e.g. \"en\"");
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            ConfigField::SiteUrl,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            ConfigField::SiteUrl,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        ConfigField::SiteUrl,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(site: &SiteSection) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&SiteSection::default()).problems().is_empty());
    }

    #[test]
    fn test_parse_site() {
        let config = test_parse_config("[site]\ntitle = \"Shop\"\nurl = \"https://shop.example\"");
        assert_eq!(config.site.title, "Shop");
        assert_eq!(config.site.url.as_deref(), Some("https://shop.example"));
        // untouched fields keep defaults
        assert_eq!(config.site.language, "en");
    }

    #[test]
    fn test_rejects_ftp_url() {
        let site = SiteSection {
            url: Some("ftp://shop.example".into()),
            ..SiteSection::default()
        };
        let diag = validate(&site);
        assert_eq!(diag.problems().len(), 1);
        assert!(diag.problems()[0].message.contains("ftp"));
    }

    #[test]
    fn test_rejects_garbage_url_and_empty_title() {
        let site = SiteSection {
            title: " ".into(),
            url: Some("not a url".into()),
            ..SiteSection::default()
        };
        let diag = validate(&site);
        assert_eq!(diag.problems().len(), 2);
    }
}
