//! Navigation bar markup.

use super::{Section, logo};
use crate::content::{SHOP_NAME, SHOP_NAME_PROSE};
use crate::nav::{NavLink, NavViewState, SCROLL_THRESHOLD, bar_classes};
use maud::{Markup, html};

/// Id of the mobile drawer, referenced by the toggle button.
const DRAWER_ID: &str = "nav-drawer";

pub fn render(state: NavViewState) -> Markup {
    let expanded = if state.drawer_open { "true" } else { "false" };

    html! {
        nav class=(bar_classes(state)) data-nav data-threshold=(SCROLL_THRESHOLD) {
            div.nav-inner {
                a.brand href=(Section::Hero.href()) {
                    (logo(50, SHOP_NAME_PROSE, "logo-round"))
                    span.brand-name { (SHOP_NAME) }
                }
                div.nav-links {
                    @for link in NavLink::ALL {
                        (link_markup(link))
                    }
                }
                button.nav-toggle type="button" aria-label="Toggle menu"
                    aria-controls=(DRAWER_ID) aria-expanded=(expanded) data-nav-toggle {
                    span.nav-toggle-bar {}
                    span.nav-toggle-bar {}
                    span.nav-toggle-bar {}
                }
            }
            div.nav-drawer id=(DRAWER_ID) hidden[!state.drawer_open] {
                @for link in NavLink::ALL {
                    (link_markup(link))
                }
            }
        }
    }
}

/// A link that closes the drawer when followed.
fn link_markup(link: NavLink) -> Markup {
    let class = if link.is_cta() { "nav-cta" } else { "nav-link" };
    html! {
        a.(class) href=(link.target().href()) data-nav-link { (link.label()) }
    }
}
