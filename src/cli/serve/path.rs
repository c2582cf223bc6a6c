//! URL to filesystem path resolution.

use percent_encoding::percent_decode_str;
use std::path::{Component, Path, PathBuf};

/// Resolve a request URL to a file under `serve_root`.
///
/// Directories resolve to their `index.html`. Anything that would leave
/// `serve_root` (`..` segments, symlinks pointing outside) resolves to `None`.
pub fn resolve_path(url: &str, serve_root: &Path) -> Option<PathBuf> {
    let clean = normalize_url(url)?;

    let rel = Path::new(&clean);
    if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }

    let canonical = serve_root.join(rel).canonicalize().ok()?;
    let root_canonical = serve_root.canonicalize().ok()?;
    if !canonical.starts_with(&root_canonical) {
        return None;
    }

    if canonical.is_file() {
        return Some(canonical);
    }

    if canonical.is_dir() {
        let index = canonical.join("index.html");
        if index.is_file() {
            return Some(index);
        }
    }

    None
}

/// Strip query and fragment, percent-decode, trim slashes.
///
/// Invalid UTF-8 after decoding yields `None`.
fn normalize_url(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    if decoded.contains('\0') || decoded.contains('\\') {
        return None;
    }
    Some(decoded.trim_matches('/').to_string())
}
