//! Content types for files in the built site.

use std::path::Path;

pub const HTML: &str = "text/html; charset=utf-8";
pub const PLAIN: &str = "text/plain; charset=utf-8";
const BINARY: &str = "application/octet-stream";

/// Extensions a built site is made of: the page, its embedded assets and
/// whatever sits in the assets directory (logo, favicon, photos, fonts).
const BY_EXTENSION: &[(&[&str], &str)] = &[
    (&["html", "htm"], HTML),
    (&["css"], "text/css; charset=utf-8"),
    (&["js", "mjs"], "text/javascript; charset=utf-8"),
    (&["txt"], PLAIN),
    (&["json", "webmanifest"], "application/json"),
    (&["png"], "image/png"),
    (&["jpg", "jpeg"], "image/jpeg"),
    (&["webp"], "image/webp"),
    (&["svg"], "image/svg+xml"),
    (&["ico"], "image/x-icon"),
    (&["woff2"], "font/woff2"),
];

/// Content type by extension, case-insensitive. Unknown files are binary.
pub fn from_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return BINARY;
    };
    BY_EXTENSION
        .iter()
        .find(|(exts, _)| exts.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .map_or(BINARY, |&(_, mime)| mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_files() {
        assert_eq!(from_path(Path::new("index.html")), HTML);
        assert_eq!(from_path(Path::new("site-0a1b2c3d.css")), "text/css; charset=utf-8");
        assert_eq!(
            from_path(Path::new("nav-0a1b2c3d.js")),
            "text/javascript; charset=utf-8"
        );
        assert_eq!(from_path(Path::new("logo.PNG")), "image/png");
        assert_eq!(from_path(Path::new("favicon.ico")), "image/x-icon");
    }

    #[test]
    fn test_unknown_is_binary() {
        assert_eq!(from_path(Path::new("menu.xyz")), BINARY);
        assert_eq!(from_path(Path::new("README")), BINARY);
    }
}
