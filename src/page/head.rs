//! Document `<head>`: title, description, social preview tags, fonts.

use super::PageContext;
use crate::content::LOGO_PATH;
use maud::{Markup, html};

const FONTS_URL: &str = "https://fonts.googleapis.com/css2?family=Bubblegum+Sans&family=Nunito:wght@400;500;600;700;800&display=swap";

pub fn render(ctx: &PageContext<'_>) -> Markup {
    let site = ctx.site;
    let image = absolute(site.url.as_deref(), LOGO_PATH);

    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            title { (site.title) }
            meta name="description" content=(site.description);
            @if !site.keywords.is_empty() {
                meta name="keywords" content=(site.keywords.join(", "));
            }
            @if !site.author.is_empty() {
                meta name="author" content=(site.author);
            }

            meta property="og:title" content=(site.title);
            meta property="og:description" content=(site.description);
            meta property="og:type" content="website";
            @if let Some(url) = &site.url {
                meta property="og:url" content=(url);
            }
            meta property="og:image" content=(image);
            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(site.title);
            meta name="twitter:description" content=(site.description);

            link rel="icon" href="/favicon.ico";
            link rel="preconnect" href="https://fonts.googleapis.com";
            link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
            link rel="stylesheet" href=(FONTS_URL);
            link rel="stylesheet" href=(ctx.stylesheet);
        }
    }
}

/// Resolve a site-root path against the site URL, if one is configured.
fn absolute(base: Option<&str>, path: &str) -> String {
    base.and_then(|base| url::Url::parse(base).ok())
        .and_then(|base| base.join(path).ok())
        .map(String::from)
        .unwrap_or_else(|| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::SiteSection;
    use crate::page::test_context;

    #[test]
    fn test_head_defaults() {
        let site = SiteSection::default();
        let html = render(&test_context(&site)).into_string();
        assert!(html.contains("<title>The Pop and Chip Shop | Homemade Baked Goodies</title>"));
        assert!(html.contains("property=\"og:type\" content=\"website\""));
        assert!(html.contains("content=\"https://popandchipshop.in/logo.png\""));
        assert!(html.contains("name=\"author\" content=\"Chaitra Poornima\""));
    }

    #[test]
    fn test_head_without_url() {
        let site = SiteSection {
            url: None,
            author: String::new(),
            ..SiteSection::default()
        };
        let html = render(&test_context(&site)).into_string();
        assert!(!html.contains("og:url"));
        assert!(!html.contains("name=\"author\""));
        assert!(html.contains("property=\"og:image\" content=\"/logo.png\""));
    }

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(Some("https://a.example/"), "/logo.png"), "https://a.example/logo.png");
        assert_eq!(absolute(None, "/logo.png"), "/logo.png");
        assert_eq!(absolute(Some("not a url"), "/logo.png"), "/logo.png");
    }
}
