//! Menu section: one card per catalog entry.

use super::{Section, icons};
use crate::content::{Catalog, MenuCategory};
use maud::{Markup, html};

pub fn render(catalog: &Catalog) -> Markup {
    html! {
        section.menu id=(Section::Menu.id()) {
            div.pattern-dots {}
            div.container {
                div.section-header {
                    h2.display.gradient-text { "Our Yummy Menu" }
                    p.section-intro {
                        "Everything is freshly baked to order with the finest ingredients. "
                        "Perfect for parties, gifts, or treating yourself!"
                    }
                }
                div.card-grid {
                    @for (index, (key, category)) in catalog.iter().enumerate() {
                        (card(index, key, category))
                    }
                }
                div.menu-footer {
                    p.menu-fresh { "All items are made fresh to order!" }
                    a.btn.btn-pink href=(Section::Contact.href()) {
                        span { "Place Your Order" }
                        (icons::arrow_right("icon-sm"))
                    }
                }
            }
        }
    }
}

/// One category card. Items are listed in catalog order, none dropped.
pub fn card(index: usize, key: &str, category: &MenuCategory) -> Markup {
    html! {
        article.menu-card data-category=(key)
            style=(format!("animation-delay: {:.1}s", index as f32 * 0.1)) {
            div.card-corner.(category.theme.css_class()) {}
            div.card-body {
                div.card-icon { (category.icon) }
                h3.display.card-title { (category.title) }
                p.card-min { (category.min_order) }
                ul.card-items {
                    @for item in category.items {
                        li {
                            span.dot {}
                            (item)
                        }
                    }
                }
            }
        }
    }
}
