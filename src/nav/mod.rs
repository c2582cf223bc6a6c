//! Navigation bar: the only stateful component on the page.
//!
//! The bar owns a [`NavViewState`] and keeps it in sync with a
//! [`ScrollEvents`] source for as long as it is mounted. The same
//! state-to-class mapping ([`bar_classes`]) drives both the server-rendered
//! markup and the script shipped to the browser.

mod scroll;
mod state;

pub use scroll::{ScrollEvents, Subscription};
pub use state::{NavLink, NavViewState, SCROLL_THRESHOLD};

use crate::page::Section;
use maud::Markup;
use std::cell::Cell;
use std::rc::Rc;

/// Class added to the bar once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "is-scrolled";

/// Class added to the bar while the mobile drawer is open.
pub const OPEN_CLASS: &str = "is-open";

/// Base class of the bar element.
pub const BAR_CLASS: &str = "site-nav";

/// Class list of the bar element for a given state.
pub fn bar_classes(state: NavViewState) -> String {
    let mut classes = String::from(BAR_CLASS);
    if state.scrolled {
        classes.push(' ');
        classes.push_str(SCROLLED_CLASS);
    }
    if state.drawer_open {
        classes.push(' ');
        classes.push_str(OPEN_CLASS);
    }
    classes
}

/// A mounted navigation bar.
///
/// Dropping the bar (or calling [`NavigationBar::unmount`]) detaches its
/// scroll listener.
pub struct NavigationBar {
    state: Rc<Cell<NavViewState>>,
    _subscription: Subscription,
}

impl NavigationBar {
    /// Mount with `{scrolled: false, drawer_open: false}` and start
    /// listening to `events`.
    pub fn mount(events: &ScrollEvents) -> Self {
        let state = Rc::new(Cell::new(NavViewState::default()));

        let observed = Rc::clone(&state);
        let subscription = events.subscribe(move |offset| {
            let mut next = observed.get();
            if next.on_scroll(offset) {
                observed.set(next);
            }
        });

        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn state(&self) -> NavViewState {
        self.state.get()
    }

    /// Menu button activation.
    pub fn toggle_menu(&self) {
        self.update(NavViewState::toggle_drawer);
    }

    /// Link activation; returns the section to scroll to.
    pub fn select(&self, link: NavLink) -> Section {
        let mut next = self.state.get();
        let target = next.select(link);
        self.state.set(next);
        target
    }

    /// Markup for the current state.
    pub fn render(&self) -> Markup {
        crate::page::nav::render(self.state())
    }

    pub fn unmount(self) {}

    fn update(&self, f: impl FnOnce(&mut NavViewState)) {
        let mut next = self.state.get();
        f(&mut next);
        self.state.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_starts_clean() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);
        assert_eq!(bar.state(), NavViewState::default());
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_scroll_updates_state() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);

        events.dispatch(50.0);
        assert!(!bar.state().scrolled);
        events.dispatch(51.0);
        assert!(bar.state().scrolled);
        events.dispatch(0.0);
        assert!(!bar.state().scrolled);
    }

    #[test]
    fn test_toggle_and_select() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);

        bar.toggle_menu();
        assert!(bar.state().drawer_open);
        assert_eq!(bar.select(NavLink::Contact), Section::Contact);
        assert!(!bar.state().drawer_open);

        bar.toggle_menu();
        bar.toggle_menu();
        assert!(!bar.state().drawer_open);
    }

    #[test]
    fn test_unmount_detaches_listener() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);
        let state = Rc::downgrade(&bar.state);

        bar.unmount();
        assert_eq!(events.listener_count(), 0);
        // The listener was the last owner besides the bar.
        assert!(state.upgrade().is_none());
        events.dispatch(500.0);
    }

    #[test]
    fn test_unmount_during_dispatch_freezes_state() {
        let events = ScrollEvents::new();
        let slot: Rc<std::cell::RefCell<Option<NavigationBar>>> = Rc::default();

        let teardown = Rc::clone(&slot);
        let _unmounter = events.subscribe(move |_| {
            if let Some(bar) = teardown.borrow_mut().take() {
                bar.unmount();
            }
        });

        let bar = NavigationBar::mount(&events);
        let state = Rc::clone(&bar.state);
        *slot.borrow_mut() = Some(bar);

        events.dispatch(200.0);
        assert!(!state.get().scrolled);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_bar_outlives_scroll_source() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);
        events.dispatch(75.0);
        drop(events);

        assert!(bar.state().scrolled);
        bar.toggle_menu();
        assert!(bar.state().drawer_open);
        bar.unmount();
    }

    #[test]
    fn test_two_bars_are_independent() {
        let events = ScrollEvents::new();
        let first = NavigationBar::mount(&events);
        let second = NavigationBar::mount(&events);

        first.toggle_menu();
        events.dispatch(90.0);
        assert!(first.state().drawer_open);
        assert!(!second.state().drawer_open);
        assert!(second.state().scrolled);

        drop(first);
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_bar_classes() {
        assert_eq!(bar_classes(NavViewState::default()), "site-nav");
        let all = NavViewState {
            scrolled: true,
            drawer_open: true,
        };
        assert_eq!(bar_classes(all), "site-nav is-scrolled is-open");
    }

    #[test]
    fn test_render_reflects_state() {
        let events = ScrollEvents::new();
        let bar = NavigationBar::mount(&events);
        events.dispatch(80.0);
        bar.toggle_menu();
        let html = bar.render().into_string();
        assert!(html.contains("site-nav is-scrolled is-open"));
        assert!(html.contains("aria-expanded=\"true\""));
    }
}
