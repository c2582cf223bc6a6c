//! Fixed page content: product catalog, contact channels, feature badges
//! and ordering steps.

mod catalog;
pub mod contact;

pub use catalog::{CATALOG, Catalog, MenuCategory, Theme};
pub use contact::ContactChannel;

/// Shop name as written in headings.
pub const SHOP_NAME: &str = "The Pop & Chip Shop";

/// Shop name as written in running text.
pub const SHOP_NAME_PROSE: &str = "The Pop and Chip Shop";

pub const OWNER: &str = "Chaitra Poornima";

/// Logo served from the site root.
pub const LOGO_PATH: &str = "/logo.png";

/// A badge in the about section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature { icon: "🏠", text: "Homemade" },
    Feature { icon: "🌿", text: "Fresh Ingredients" },
    Feature { icon: "💝", text: "Made with Love" },
    Feature { icon: "📦", text: "Made to Order" },
];

/// Steps listed under "How to Order", in order.
pub const ORDER_STEPS: [&str; 4] = [
    "Choose your favorites from our menu",
    "Message us on WhatsApp or Instagram",
    "Confirm your order & delivery details",
    "Enjoy your fresh baked goodies!",
];

/// Glyphs floating over the hero and contact backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingGlyph {
    pub glyph: &'static str,
    /// Placement class (corner and size).
    pub slot: &'static str,
    /// Animation delay in tenths of a second.
    pub delay: u8,
    /// Softer bounce instead of float.
    pub bounce: bool,
}

pub const FLOATING_GLYPHS: [FloatingGlyph; 6] = [
    FloatingGlyph { glyph: "🍪", slot: "float-a", delay: 0, bounce: false },
    FloatingGlyph { glyph: "🧁", slot: "float-b", delay: 5, bounce: false },
    FloatingGlyph { glyph: "🍭", slot: "float-c", delay: 10, bounce: false },
    FloatingGlyph { glyph: "🎂", slot: "float-d", delay: 15, bounce: false },
    FloatingGlyph { glyph: "✨", slot: "float-e", delay: 3, bounce: true },
    FloatingGlyph { glyph: "💖", slot: "float-f", delay: 8, bounce: true },
];
