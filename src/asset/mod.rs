//! Static assets copied verbatim into the output directory.
//!
//! ```text
//! assets/logo.png     -> public/logo.png
//! assets/favicon.ico  -> public/favicon.ico
//! assets/img/x.webp   -> public/img/x.webp
//! ```
//!
//! The page references `/logo.png` and `/favicon.ico`; both are expected to
//! live in the assets directory.

pub mod minify;

use crate::debug;
use anyhow::{Context, Result};
use jwalk::WalkDir;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Files the rendered page links to by root path.
pub const REQUIRED_ASSETS: [&str; 2] = ["logo.png", "favicon.ico"];

/// Platform metadata never copied to the output.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Every regular file under `dir`, recursively, sorted for stable output.
///
/// Symlinks are not followed. A missing directory yields no files.
pub fn scan_assets(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).skip_hidden(false) {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let ignored = entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_FILES.contains(&name));
        if entry.file_type().is_file() && !ignored {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Required assets absent from `dir`.
pub fn missing_required(dir: &Path) -> Vec<&'static str> {
    REQUIRED_ASSETS
        .into_iter()
        .filter(|name| !dir.join(name).is_file())
        .collect()
}

/// Copy one asset from `assets_root` to the same relative path under
/// `output`, minifying `.css`/`.js` when requested.
///
/// Outputs newer than their source are left alone unless `clean` is set.
/// Returns whether the file was written.
pub fn process_asset(
    source: &Path,
    assets_root: &Path,
    output: &Path,
    clean: bool,
    minify: bool,
) -> Result<bool> {
    let rel = source
        .strip_prefix(assets_root)
        .with_context(|| format!("{} is outside {}", source.display(), assets_root.display()))?;
    let dest = output.join(rel);

    if !clean && dest.exists() && !is_newer_than(source, &dest) {
        return Ok(false);
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    let minified = if minify {
        fs::read_to_string(source)
            .ok()
            .and_then(|text| minify::minify_by_ext(source, &text))
    } else {
        None
    };

    match minified {
        Some(text) => fs::write(&dest, text)?,
        None => {
            fs::copy(source, &dest).with_context(|| {
                format!("Failed to copy {} to {}", source.display(), dest.display())
            })?;
        }
    }
    debug!("assets"; "{}", rel.display());
    Ok(true)
}

fn mtime(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Whether `a` was modified after `b`. Unknown times compare as not newer.
fn is_newer_than(a: &Path, b: &Path) -> bool {
    let (Some(a_time), Some(b_time)) = (mtime(a), mtime(b)) else {
        return false;
    };
    a_time > b_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_assets_recursive_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("img")).unwrap();
        fs::write(dir.path().join("logo.png"), b"png").unwrap();
        fs::write(dir.path().join("img/b.webp"), b"webp").unwrap();
        fs::write(dir.path().join("favicon.ico"), b"ico").unwrap();

        let files = scan_assets(dir.path()).unwrap();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("favicon.ico"),
                PathBuf::from("img/b.webp"),
                PathBuf::from("logo.png"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_platform_metadata() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("logo.png"), b"png").unwrap();
        fs::write(dir.path().join(".DS_Store"), b"").unwrap();
        fs::write(dir.path().join(".well-known"), b"x").unwrap();

        let files = scan_assets(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join(".well-known"), dir.path().join("logo.png")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_does_not_follow_symlink_loop() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("logo.png"), b"png").unwrap();
        std::os::unix::fs::symlink(&assets, assets.join("loop")).unwrap();

        let files = scan_assets(&assets).unwrap();
        assert_eq!(files, vec![assets.join("logo.png")]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_assets(&dir.path().join("nope")).unwrap().is_empty());
    }

    #[test]
    fn test_missing_required() {
        let dir = TempDir::new().unwrap();
        assert_eq!(missing_required(dir.path()), vec!["logo.png", "favicon.ico"]);
        fs::write(dir.path().join("logo.png"), b"png").unwrap();
        assert_eq!(missing_required(dir.path()), vec!["favicon.ico"]);
    }

    #[test]
    fn test_process_asset_copies_and_skips_fresh() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        fs::create_dir_all(src.path().join("img")).unwrap();
        let file = src.path().join("img/logo.png");
        fs::write(&file, b"png").unwrap();

        assert!(process_asset(&file, src.path(), out.path(), false, false).unwrap());
        assert_eq!(fs::read(out.path().join("img/logo.png")).unwrap(), b"png");

        // Destination is at least as new as the source now
        assert!(!process_asset(&file, src.path(), out.path(), false, false).unwrap());
        assert!(process_asset(&file, src.path(), out.path(), true, false).unwrap());
    }

    #[test]
    fn test_process_asset_minifies_css() {
        let src = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let file = src.path().join("extra.css");
        let css = ".a {\n  color: red;\n}\n";
        fs::write(&file, css).unwrap();

        process_asset(&file, src.path(), out.path(), false, true).unwrap();
        let written = fs::read_to_string(out.path().join("extra.css")).unwrap();
        assert!(written.len() < css.len());
    }
}
