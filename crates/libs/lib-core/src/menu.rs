//! Mobile menu state machine.
//!
//! Two states, two events. Any link activated inside the overlay closes it, so the
//! overlay never stays open after navigation.

/// Visibility of the mobile menu overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User interactions that affect the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    /// The navbar toggle button was activated.
    Toggle,
    /// A link or the CTA inside the overlay was activated.
    LinkActivated,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Next state after `event`.
    pub fn apply(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkActivated) => MenuState::Closed,
        }
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let state = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(state, MenuState::Open);
        assert_eq!(state.apply(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_link_activation_always_closes() {
        for state in [MenuState::Closed, MenuState::Open] {
            assert_eq!(state.apply(MenuEvent::LinkActivated), MenuState::Closed);
        }
    }

    #[test]
    fn test_default_is_closed() {
        assert!(!MenuState::default().is_open());
        assert_eq!(MenuState::from(true), MenuState::Open);
    }
}
