//! # Page Shell State
//!
//! The two state cells the page owns (scroll-past-threshold and menu visibility) plus the
//! derived scroll-to-top flag, driven by discrete events. The web crate mirrors these
//! fields into signals; this reducer is the single place the transitions are defined.

use crate::config::Config;
use crate::menu::{MenuEvent, MenuState};
use crate::navbar::NavbarStyle;
use crate::scroll::ScrollObserver;

/// Events handled by the page shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShellEvent {
    /// Viewport vertical offset sampled on a scroll event.
    Scrolled(f64),
    Menu(MenuEvent),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellState {
    navbar_scroll: ScrollObserver,
    to_top_scroll: ScrollObserver,
    menu: MenuState,
}

impl ShellState {
    pub fn new(config: &Config) -> Self {
        Self {
            navbar_scroll: ScrollObserver::new(config.scroll_threshold_px),
            to_top_scroll: ScrollObserver::new(config.scroll_to_top_offset_px),
            menu: MenuState::Closed,
        }
    }

    /// Apply one event. Returns `true` when any rendered value changed.
    pub fn handle(&mut self, event: ShellEvent) -> bool {
        match event {
            ShellEvent::Scrolled(offset) => {
                let navbar = self.navbar_scroll.observe(offset).is_some();
                let to_top = self.to_top_scroll.observe(offset).is_some();
                navbar || to_top
            }
            ShellEvent::Menu(event) => {
                let next = self.menu.apply(event);
                let changed = next != self.menu;
                if changed {
                    tracing::debug!(?event, from = ?self.menu, to = ?next, "menu transition");
                }
                self.menu = next;
                changed
            }
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.navbar_scroll.is_past()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.to_top_scroll.is_past()
    }

    pub fn navbar(&self) -> NavbarStyle {
        NavbarStyle::resolve(self.is_scrolled(), self.menu)
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
