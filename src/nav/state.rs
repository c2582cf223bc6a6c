//! Navigation bar view state.

use crate::page::Section;

/// Vertical offset past which the bar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Whether `offset` lies past the scroll threshold.
///
/// The boundary itself (`offset == 50`) still counts as the top zone.
#[inline]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Links shown both in the desktop bar and in the mobile drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Menu,
    About,
    Contact,
    OrderNow,
}

impl NavLink {
    /// Links in display order.
    pub const ALL: [Self; 4] = [Self::Menu, Self::About, Self::Contact, Self::OrderNow];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Menu => "Menu",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::OrderNow => "Order Now",
        }
    }

    pub const fn target(self) -> Section {
        match self {
            Self::Menu => Section::Menu,
            Self::About => Section::About,
            Self::Contact | Self::OrderNow => Section::Contact,
        }
    }

    /// Call-to-action styling instead of a plain text link.
    pub const fn is_cta(self) -> bool {
        matches!(self, Self::OrderNow)
    }
}

/// `{scrolled, drawer_open}`: all four combinations are valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavViewState {
    pub scrolled: bool,
    pub drawer_open: bool,
}

impl NavViewState {
    /// Recompute `scrolled` from a scroll offset.
    ///
    /// Returns `true` only when the threshold was crossed.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = is_scrolled(offset);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Follow a navigation link. The drawer always closes first.
    pub fn select(&mut self, link: NavLink) -> Section {
        self.drawer_open = false;
        link.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = NavViewState::default();
        assert!(!state.scrolled);
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(49.9));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn test_scroll_reports_only_crossings() {
        let mut state = NavViewState::default();
        assert!(!state.on_scroll(10.0));
        assert!(!state.on_scroll(50.0));
        assert!(state.on_scroll(51.0));
        assert!(state.scrolled);
        assert!(!state.on_scroll(300.0));
        assert!(!state.on_scroll(120.0));
        assert!(state.on_scroll(50.0));
        assert!(!state.scrolled);
    }

    #[test]
    fn test_toggle_drawer_alternates() {
        let mut state = NavViewState::default();
        state.toggle_drawer();
        assert!(state.drawer_open);
        state.toggle_drawer();
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_select_closes_drawer() {
        for link in NavLink::ALL {
            let mut state = NavViewState {
                scrolled: true,
                drawer_open: true,
            };
            state.select(link);
            assert!(!state.drawer_open);
            assert!(state.scrolled);
        }
    }

    #[test]
    fn test_select_with_closed_drawer() {
        let mut state = NavViewState::default();
        assert_eq!(state.select(NavLink::About), Section::About);
        assert!(!state.drawer_open);
    }

    #[test]
    fn test_link_targets() {
        assert_eq!(NavLink::Menu.target(), Section::Menu);
        assert_eq!(NavLink::OrderNow.target(), Section::Contact);
        assert!(NavLink::OrderNow.is_cta());
        assert!(!NavLink::Contact.is_cta());
    }

    #[test]
    fn test_scroll_keeps_drawer() {
        let mut state = NavViewState::default();
        state.toggle_drawer();
        state.on_scroll(200.0);
        assert!(state.drawer_open);
    }
}
