//! # Navbar Style
//!
//! The navbar is a pure function of `(scrolled, menu)`. [`NavbarStyle::resolve`] picks the
//! chrome, link row, toggle button and toggle icon; the web crate only reads the class
//! strings back out.
//!
//! | `scrolled || menu open` | chrome |
//! |---|---|
//! | `true`  | translucent white, blur, bottom border, shadow, `py-3` |
//! | `false` | transparent, `py-6` |

use crate::menu::MenuState;

const NAV_BASE: &str = "fixed top-0 left-0 right-0 z-50 transition-all duration-300";

/// Overall navbar background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavChrome {
    Solid,
    Transparent,
}

impl NavChrome {
    pub fn class(self) -> &'static str {
        match self {
            NavChrome::Solid => {
                "bg-white/80 backdrop-blur-xl shadow-sm border-b border-gray-100/50 py-3"
            }
            NavChrome::Transparent => "bg-transparent py-6",
        }
    }
}

/// Desktop link row: a bordered pill over the hero, plain text once scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRow {
    Pill,
    Plain,
}

impl LinkRow {
    pub fn class(self) -> &'static str {
        match self {
            LinkRow::Pill => {
                "hidden md:flex gap-8 text-sm font-medium transition-all duration-300 \
                 text-gray-700 bg-white/50 backdrop-blur-md px-6 py-2 rounded-full border border-white/40 shadow-sm"
            }
            LinkRow::Plain => "hidden md:flex gap-8 text-sm font-medium transition-all duration-300 text-gray-600",
        }
    }
}

/// Mobile toggle button surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleSurface {
    Muted,
    Frosted,
}

impl ToggleSurface {
    pub fn class(self) -> &'static str {
        match self {
            ToggleSurface::Muted => {
                "md:hidden relative z-50 p-2 text-gray-900 rounded-full border shadow-sm transition-colors \
                 bg-gray-100 border-gray-200"
            }
            ToggleSurface::Frosted => {
                "md:hidden relative z-50 p-2 text-gray-900 rounded-full border shadow-sm transition-colors \
                 bg-white/50 backdrop-blur-md border-white/40"
            }
        }
    }
}

/// Glyph shown in the mobile toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Hamburger
    Menu,
    /// "X"
    Close,
}

/// Everything the navbar needs to render for one `(scrolled, menu)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavbarStyle {
    pub chrome: NavChrome,
    pub links: LinkRow,
    pub toggle: ToggleSurface,
    pub icon: ToggleIcon,
}

impl NavbarStyle {
    pub fn resolve(scrolled: bool, menu: MenuState) -> Self {
        let chrome = if scrolled || menu.is_open() {
            NavChrome::Solid
        } else {
            NavChrome::Transparent
        };
        // The link row and toggle track scrolling only, not the menu.
        let (links, toggle) = if scrolled {
            (LinkRow::Plain, ToggleSurface::Muted)
        } else {
            (LinkRow::Pill, ToggleSurface::Frosted)
        };
        let icon = if menu.is_open() {
            ToggleIcon::Close
        } else {
            ToggleIcon::Menu
        };

        Self {
            chrome,
            links,
            toggle,
            icon,
        }
    }

    /// Full class attribute for the `<nav>` element.
    pub fn nav_class(&self) -> String {
        format!("{} {}", NAV_BASE, self.chrome.class())
    }

    /// Whether the chrome is in its compact, opaque form.
    pub fn is_solid(&self) -> bool {
        self.chrome == NavChrome::Solid
    }
}
