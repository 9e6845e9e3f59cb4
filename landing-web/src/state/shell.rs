//! Page shell state management

use leptos::prelude::*;
use lib_core::{Config, MenuEvent, MenuState, NavbarStyle, ShellEvent, ShellState};

/// Shell context: the scroll and menu cells, shared by the navbar, overlay and sections.
#[derive(Clone, Copy)]
pub struct ShellContext {
    pub shell: RwSignal<ShellState>,
}

impl ShellContext {
    pub fn new(config: &Config) -> Self {
        Self {
            shell: RwSignal::new(ShellState::new(config)),
        }
    }

    /// Apply `event`, notifying subscribers only when a rendered value changed.
    pub fn dispatch(&self, event: ShellEvent) {
        self.shell.maybe_update(|shell| shell.handle(event));
    }

    pub fn scrolled_to(&self, offset: f64) {
        self.dispatch(ShellEvent::Scrolled(offset));
    }

    pub fn toggle_menu(&self) {
        self.dispatch(ShellEvent::Menu(MenuEvent::Toggle));
    }

    pub fn link_activated(&self) {
        self.dispatch(ShellEvent::Menu(MenuEvent::LinkActivated));
    }

    pub fn is_scrolled(&self) -> bool {
        self.shell.with(|shell| shell.is_scrolled())
    }

    pub fn menu(&self) -> MenuState {
        self.shell.with(|shell| shell.menu())
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu().is_open()
    }

    pub fn navbar(&self) -> NavbarStyle {
        self.shell.with(|shell| shell.navbar())
    }

    pub fn show_scroll_to_top(&self) -> bool {
        self.shell.with(|shell| shell.show_scroll_to_top())
    }
}

pub fn provide_shell_context(config: &Config) -> ShellContext {
    let context = ShellContext::new(config);
    provide_context(context);
    context
}

pub fn use_shell_context() -> ShellContext {
    expect_context::<ShellContext>()
}
