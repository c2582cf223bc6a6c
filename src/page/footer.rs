//! Page footer.

use super::{icons, logo};
use crate::content::{ContactChannel, SHOP_NAME, SHOP_NAME_PROSE};
use maud::{Markup, html};

pub fn render(year: u16) -> Markup {
    let instagram = ContactChannel::instagram();
    let phone = ContactChannel::phone();

    html! {
        footer.site-footer {
            div.container.footer-row {
                div.footer-brand {
                    (logo(40, SHOP_NAME_PROSE, "logo-round"))
                    span.display { (SHOP_NAME) }
                }
                div.footer-links {
                    a href=(instagram.target_uri) target="_blank" rel="noopener noreferrer"
                        aria-label="Instagram" {
                        (icons::instagram("icon-md"))
                    }
                    a href=(phone.target_uri) aria-label="Call" {
                        (icons::phone("icon-md"))
                    }
                }
                p.copyright {
                    "© " (year) " " (SHOP_NAME_PROSE) ". Made with 💖"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year() {
        let html = render(2031).into_string();
        assert!(html.contains("© 2031 The Pop and Chip Shop. Made with 💖"));
    }
}
