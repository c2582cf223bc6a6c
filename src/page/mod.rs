//! Page component tree.
//!
//! The page root composes the navigation bar and five sections in a fixed
//! vertical order. Every section is a pure function returning [`Markup`];
//! only the navigation bar takes state.
//!
//! # Section Order
//!
//! ```text
//! nav -> #hero -> #menu -> #about -> #contact -> footer
//! ```
//!
//! The anchor ids are linked from the navigation bar and may be linked from
//! outside the site, so they must stay stable and unique.

mod about;
mod contact;
mod footer;
mod head;
mod hero;
mod icons;
pub mod menu;
pub mod nav;
mod overlay;

use crate::config::section::SiteSection;
use crate::content::{CATALOG, LOGO_PATH};
use crate::nav::{NavigationBar, ScrollEvents};
use maud::{DOCTYPE, Markup, html};

/// Addressable section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Menu,
    About,
    Contact,
}

impl Section {
    /// Sections in vertical order.
    pub const ORDER: [Self; 4] = [Self::Hero, Self::Menu, Self::About, Self::Contact];

    /// Fragment identifier (without `#`).
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Menu => "menu",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Self::Hero => "#hero",
            Self::Menu => "#menu",
            Self::About => "#about",
            Self::Contact => "#contact",
        }
    }
}

/// Inputs of the page root that vary per build.
pub struct PageContext<'a> {
    pub site: &'a SiteSection,
    /// URL of the stylesheet.
    pub stylesheet: &'a str,
    /// URL of the navigation script.
    pub script: &'a str,
    /// Year printed in the footer copyright line.
    pub year: u16,
}

/// Render the whole document.
///
/// The navigation bar is mounted for the duration of the render, so the
/// markup reflects its initial state.
pub fn render(ctx: &PageContext<'_>) -> Markup {
    let events = ScrollEvents::new();
    let bar = NavigationBar::mount(&events);
    let nav = bar.render();
    bar.unmount();

    html! {
        (DOCTYPE)
        html lang=(ctx.site.language) {
            (head::render(ctx))
            body {
                main.page {
                    (nav)
                    (hero::render())
                    (menu::render(&CATALOG))
                    (about::render())
                    (contact::render())
                    (footer::render(ctx.year))
                }
                script src=(ctx.script) defer {}
            }
        }
    }
}

/// Logo image at a square `size` in pixels.
fn logo(size: u32, alt: &str, class: &str) -> Markup {
    html! {
        img.(class) src=(LOGO_PATH) alt=(alt) width=(size) height=(size);
    }
}

#[cfg(test)]
pub(crate) fn test_context(site: &SiteSection) -> PageContext<'_> {
    PageContext {
        site,
        stylesheet: "/site.css",
        script: "/nav.js",
        year: 2026,
    }
}
