//! Inline SVG icons (Lucide outline style, 24px grid).

use leptos::prelude::*;

/// Renders a stroked SVG icon from path data.
///
/// ```rust,ignore
/// view! { <Icon path=ICON_MENU class="w-6 h-6" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Additional CSS class names
    #[prop(default = "w-6 h-6")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Hamburger
pub const ICON_MENU: &str = "M4 6h16M4 12h16M4 18h16";

/// Close ("X")
pub const ICON_X: &str = "M18 6 6 18M6 6l12 12";

/// Open arc, spun by `animate-spin` for loading placeholders
pub const ICON_LOADER: &str = "M21 12a9 9 0 1 1-6.219-8.56";

pub const ICON_ARROW_UP: &str = "m5 12 7-7 7 7M12 19V5";

pub const ICON_CHECK: &str = "M20 6 9 17l-5-5";

pub const ICON_SPARKLES: &str = "M12 3l1.9 5.1L19 10l-5.1 1.9L12 17l-1.9-5.1L5 10l5.1-1.9z";
