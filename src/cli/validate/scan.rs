//! Extract ids and references from the rendered page.

use percent_encoding::percent_decode_str;

/// Everything the checks need from one parsed document.
#[derive(Debug, Default)]
pub struct PageScan {
    /// Every `id` attribute, in document order.
    pub ids: Vec<String>,
    /// Fragment targets of `href="#..."` links (without `#`), in order.
    pub fragments: Vec<String>,
    /// Site-root paths from `src` and `href`, query and fragment stripped.
    pub local_refs: Vec<String>,
}

/// Parse `html` and collect ids and references.
pub fn scan_page(html: &str) -> Result<PageScan, String> {
    let dom = tl::parse(html, tl::ParserOptions::default()).map_err(|e| format!("{e:?}"))?;
    let mut scan = PageScan::default();

    for tag in dom.nodes().iter().filter_map(tl::Node::as_tag) {
        let attrs = tag.attributes();
        let get = |name: &'static str| {
            attrs
                .get(name)
                .flatten()
                .map(|v| v.as_utf8_str().into_owned())
        };

        if let Some(id) = get("id") {
            scan.ids.push(id);
        }
        for value in [get("href"), get("src")].into_iter().flatten() {
            if let Some(fragment) = value.strip_prefix('#') {
                scan.fragments.push(fragment.to_string());
            } else if let Some(path) = local_path(&value) {
                scan.local_refs.push(path);
            }
        }
    }

    Ok(scan)
}

/// `/logo.png?v=1` -> `logo.png`; external and protocol-relative URLs yield `None`.
fn local_path(value: &str) -> Option<String> {
    if !value.starts_with('/') || value.starts_with("//") {
        return None;
    }
    let path = value.split(['?', '#']).next().unwrap_or_default();
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    Some(decoded.trim_start_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_collects_in_order() {
        let html = r##"<html><head><link rel="stylesheet" href="/site.css?v=2"></head>
            <body><nav><a href="#menu">Menu</a><a href="https://wa.me/1">WA</a></nav>
            <section id="hero"><img src="/logo%20big.png"></section>
            <section id="menu"></section><script src="//cdn.example/x.js"></script></body></html>"##;
        let scan = scan_page(html).unwrap();
        assert_eq!(scan.ids, ["hero", "menu"]);
        assert_eq!(scan.fragments, ["menu"]);
        assert_eq!(scan.local_refs, ["site.css", "logo big.png"]);
    }

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("/a/b.png#x").as_deref(), Some("a/b.png"));
        assert_eq!(local_path("tel:+919972382049"), None);
        assert_eq!(local_path("https://instagram.com/x"), None);
        assert_eq!(local_path("//fonts.gstatic.com"), None);
    }
}
