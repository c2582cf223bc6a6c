//! `menu` command: dump the product catalog as JSON.

use crate::cli::MenuArgs;
use crate::content::{CATALOG, Catalog};
use crate::log;
use anyhow::{Context, Result};
use std::fs;

/// Serialize the catalog, keys in display order.
pub fn to_json(catalog: &Catalog, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(catalog)?
    } else {
        serde_json::to_string(catalog)?
    };
    Ok(json)
}

/// Run the `menu` command.
pub fn run(args: &MenuArgs) -> Result<()> {
    let json = to_json(&CATALOG, args.pretty)?;

    match &args.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("menu"; "{} categories -> {}", CATALOG.keys().count(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_keys_in_catalog_order() {
        let json = to_json(&CATALOG, false).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["muffins", "loafCakes", "cookies", "cakePops"]);
    }

    #[test]
    fn test_category_fields() {
        let json = to_json(&CATALOG, true).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let cookies = &value["cookies"];
        assert_eq!(cookies["minOrder"], "Min 6");
        assert_eq!(cookies["items"].as_array().unwrap().len(), 6);
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_run_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out/menu.json");
        let args = MenuArgs {
            pretty: false,
            file: Some(PathBuf::from(&path)),
        };
        run(&args).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("{\"muffins\""));
    }
}
