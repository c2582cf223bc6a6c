//! Stylesheet and navigation script compiled into the binary.
//!
//! Both are templates: the class names and scroll threshold used by the
//! navigation state machine are substituted at build time so the browser
//! applies the same state-to-style mapping as the server-rendered markup.
//!
//! ```ignore
//! let urls = embed::write_embedded_assets(&config, output_dir)?;
//! page::render(&PageContext { stylesheet: &urls.stylesheet, script: &urls.script, .. });
//! ```

mod asset;
mod template;

pub use asset::{AssetKind, EmbeddedAsset};
pub use template::{Template, TemplateVars, unfilled};

use crate::config::SiteConfig;
use crate::nav::{BAR_CLASS, OPEN_CLASS, SCROLL_THRESHOLD, SCROLLED_CLASS};
use anyhow::Result;
use std::path::Path;

/// Class names and threshold shared with [`crate::nav`].
#[derive(Debug, Clone)]
pub struct NavVars {
    pub threshold: f64,
    pub bar_class: &'static str,
    pub scrolled_class: &'static str,
    pub open_class: &'static str,
}

impl Default for NavVars {
    fn default() -> Self {
        Self {
            threshold: SCROLL_THRESHOLD,
            bar_class: BAR_CLASS,
            scrolled_class: SCROLLED_CLASS,
            open_class: OPEN_CLASS,
        }
    }
}

/// Placeholders in the script are JS literals; quote strings as JSON.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".into())
}

/// Script side of [`NavVars`].
pub struct ScriptVars(pub NavVars);

impl TemplateVars for ScriptVars {
    fn values(&self) -> Vec<(&'static str, String)> {
        let vars = &self.0;
        vec![
            ("SCROLL_THRESHOLD", vars.threshold.to_string()),
            ("SCROLLED_CLASS", js_string(vars.scrolled_class)),
            ("OPEN_CLASS", js_string(vars.open_class)),
        ]
    }
}

/// Stylesheet side of [`NavVars`]. Class names are inserted bare.
pub struct StyleVars(pub NavVars);

impl TemplateVars for StyleVars {
    fn values(&self) -> Vec<(&'static str, String)> {
        let vars = &self.0;
        vec![
            ("BAR_CLASS", vars.bar_class.to_owned()),
            ("SCROLLED_CLASS", vars.scrolled_class.to_owned()),
            ("OPEN_CLASS", vars.open_class.to_owned()),
        ]
    }
}

/// Navigation bar behaviour: scroll flag and mobile drawer.
pub const NAV_JS: EmbeddedAsset<ScriptVars> =
    EmbeddedAsset::new(AssetKind::JavaScript, "nav", include_str!("nav.js"));

/// Page stylesheet.
pub const SITE_CSS: EmbeddedAsset<StyleVars> =
    EmbeddedAsset::new(AssetKind::Css, "site", include_str!("site.css"));

/// URL paths of the written assets, for linking from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    pub stylesheet: String,
    pub script: String,
}

/// Write all embedded assets to output directory
///
/// Earlier versions of each asset are removed first, so the output holds
/// exactly one stylesheet and one script.
pub fn write_embedded_assets(config: &SiteConfig, output_dir: &Path) -> Result<AssetUrls> {
    std::fs::create_dir_all(output_dir)?;
    let minify = config.build.minify;

    SITE_CSS.cleanup_old(output_dir)?;
    let stylesheet =
        SITE_CSS.write_with_vars(output_dir, &StyleVars(NavVars::default()), minify)?;

    NAV_JS.cleanup_old(output_dir)?;
    let script = NAV_JS.write_with_vars(output_dir, &ScriptVars(NavVars::default()), minify)?;

    Ok(AssetUrls { stylesheet, script })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_script_vars_injected() {
        let js = NAV_JS.render(&ScriptVars(NavVars::default()), false);
        assert!(js.contains("const THRESHOLD = 50;"));
        assert!(js.contains("const SCROLLED = \"is-scrolled\";"));
        assert!(js.contains("const OPEN = \"is-open\";"));
        assert!(unfilled(&js).is_empty());
    }

    #[test]
    fn test_style_vars_injected() {
        let css = SITE_CSS.render(&StyleVars(NavVars::default()), false);
        assert!(css.contains(".site-nav.is-scrolled"));
        assert!(css.contains(".site-nav.is-open"));
        assert!(unfilled(&css).is_empty());
    }

    #[test]
    fn test_write_embedded_assets() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.build.minify = false;

        let urls = write_embedded_assets(&config, dir.path()).unwrap();
        assert!(urls.stylesheet.starts_with("/site-"));
        assert!(urls.script.starts_with("/nav-"));
        assert!(dir.path().join(&urls.stylesheet[1..]).is_file());
        assert!(dir.path().join(&urls.script[1..]).is_file());

        // Rewriting with different content leaves a single copy of each
        config.build.minify = true;
        let again = write_embedded_assets(&config, dir.path()).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names.len(), 2, "{names:?}");
        assert!(dir.path().join(&again.script[1..]).is_file());
    }

    #[test]
    fn test_minified_script_is_smaller() {
        let vars = ScriptVars(NavVars::default());
        let plain = NAV_JS.render(&vars, false);
        let min = NAV_JS.render(&vars, true);
        assert!(min.len() < plain.len());
    }
}
