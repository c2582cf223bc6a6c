//! Hero banner.

use super::{Section, icons, logo, overlay};
use crate::content::SHOP_NAME;
use maud::{Markup, html};

pub fn render() -> Markup {
    html! {
        section.hero id=(Section::Hero.id()) {
            (overlay::render())
            div.circle.circle-teal {}
            div.circle.circle-pink {}

            div.hero-content {
                div.hero-logo.float {
                    (logo(280, "The Pop and Chip Shop Logo", "logo-shadow"))
                }
                h1.display.hero-title { (SHOP_NAME) }
                p.hero-tagline {
                    "Homemade baked goodies made with love!"
                    br;
                    "Cookies, Muffins, Cake Pops & More"
                }
                div.hero-actions {
                    a.btn.btn-light href=(Section::Menu.href()) { "Explore Our Menu" }
                    a.btn.btn-teal href=(Section::Contact.href()) { "Order Now" }
                }
                div.scroll-hint {
                    (icons::arrow_down("icon-lg"))
                }
            }
        }
    }
}
