//! Product catalog shown in the menu section.
//!
//! The table is a compile-time constant: entry order is display order and
//! nothing adds, removes, or reorders entries at runtime.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Colour gradient applied to a card's decorative corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// pink-soft -> pink-main
    Pink,
    /// brown-cookie -> pink-dark
    Cookie,
    /// teal-main -> teal-dark
    Teal,
    /// purple-main -> pink-dark
    Purple,
}

impl Theme {
    /// CSS class carrying the gradient.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Pink => "theme-pink",
            Self::Cookie => "theme-cookie",
            Self::Teal => "theme-teal",
            Self::Purple => "theme-purple",
        }
    }
}

/// Display attributes of one product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub min_order: &'static str,
    pub items: &'static [&'static str],
    pub theme: Theme,
}

/// Ordered, read-only mapping from category key to its attributes.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [(&'static str, MenuCategory)],
}

impl Catalog {
    pub const fn new(entries: &'static [(&'static str, MenuCategory)]) -> Self {
        Self { entries }
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &'static MenuCategory)> {
        self.entries.iter().map(|(key, category)| (*key, category))
    }

    pub fn get(&self, key: &str) -> Option<&'static MenuCategory> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, category)| category)
    }

    /// Category keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, category) in self.entries {
            map.serialize_entry(key, category)?;
        }
        map.end()
    }
}

/// The bakery menu.
pub static CATALOG: Catalog = Catalog::new(&[
    (
        "muffins",
        MenuCategory {
            title: "Muffins",
            icon: "🧁",
            min_order: "Min 6",
            items: &["Blueberry", "Vanilla Choco-Chip", "Chocolate"],
            theme: Theme::Pink,
        },
    ),
    (
        "loafCakes",
        MenuCategory {
            title: "Loaf Cakes",
            icon: "🍞",
            min_order: "250g / 500g / 1kg",
            items: &[
                "Plum Cake",
                "Banana Walnut",
                "Ragi Chocolate",
                "Double Chocolate",
                "Tooti-Frooti",
            ],
            theme: Theme::Cookie,
        },
    ),
    (
        "cookies",
        MenuCategory {
            title: "Cookies",
            icon: "🍪",
            min_order: "Min 6",
            items: &[
                "Choco-chip",
                "Oatmeal Choco-chip",
                "Oatmeal Raisin",
                "Biscoff",
                "Ragi Jaggery",
                "Coconut",
            ],
            theme: Theme::Teal,
        },
    ),
    (
        "cakePops",
        MenuCategory {
            title: "Cake Pops",
            icon: "🍭",
            min_order: "Min 10",
            items: &["Vanilla", "Chocolate", "Red Velvet"],
            theme: Theme::Purple,
        },
    ),
]);
