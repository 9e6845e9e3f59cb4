//! Navigation Bar Component
//!
//! Fixed header whose chrome follows [`NavbarStyle`]: transparent over the hero, frosted and
//! compact once the page is scrolled or the mobile menu is open.

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::navbar::ToggleIcon;

use crate::components::icons::{Icon, ICON_MENU, ICON_X};
use crate::state::shell::use_shell_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let shell = use_shell_context();
    let config = core_config();
    let style = Memo::new(move |_| shell.navbar());

    let links = config
        .nav_links
        .iter()
        .map(|link| {
            view! {
                <a href=link.href.clone() class="hover:text-red-600 transition-colors">
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || style.get().nav_class()>
            <div class="max-w-7xl mx-auto px-6 flex justify-between items-center w-full">
                // Logo
                <div class="text-xl font-bold tracking-tighter text-gray-900 relative z-50">
                    {config.brand.name.clone()} " "
                    <span class="text-red-600">{config.brand.accent.clone()}</span>
                </div>

                // Desktop Nav
                <div class=move || style.get().links.class()>{links}</div>

                // Desktop CTA
                <a
                    href=config.cta.href.clone()
                    class="hidden md:block px-5 py-2.5 bg-gray-900 text-white text-sm font-medium rounded-full shadow-lg hover:scale-105 transition-transform hover:bg-gray-800"
                >
                    {config.cta.label.clone()}
                </a>

                // Mobile Toggle
                <button
                    class=move || style.get().toggle.class()
                    on:click=move |_| shell.toggle_menu()
                    aria-label="Toggle menu"
                    aria-expanded=move || shell.is_menu_open().to_string()
                >
                    {move || match style.get().icon {
                        ToggleIcon::Close => view! { <Icon path=ICON_X/> }.into_any(),
                        ToggleIcon::Menu => view! { <Icon path=ICON_MENU/> }.into_any(),
                    }}
                </button>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shell::provide_shell_context;
    use crate::utils::testing::reactive_scope;
    use leptos::tachys::view::RenderHtml;
    use lib_core::navbar::NavChrome;
    use lib_core::Config;

    fn render_navbar() -> String {
        view! { <Navbar/> }.to_html()
    }

    fn has_icon(html: &str, path: &str) -> bool {
        html.contains(&format!("d=\"{}\"", path))
    }

    #[test]
    fn test_toggle_icon_follows_menu() {
        let _owner = reactive_scope();
        let shell = provide_shell_context(&Config::default());

        let closed = render_navbar();
        assert!(has_icon(&closed, ICON_MENU) && !has_icon(&closed, ICON_X), "{closed}");
        assert!(closed.contains("aria-expanded=\"false\""), "{closed}");

        shell.toggle_menu();
        let open = render_navbar();
        assert!(has_icon(&open, ICON_X) && !has_icon(&open, ICON_MENU), "{open}");
        assert!(open.contains("aria-expanded=\"true\""), "{open}");

        shell.link_activated();
        let closed_again = render_navbar();
        assert!(has_icon(&closed_again, ICON_MENU), "{closed_again}");
    }

    #[test]
    fn test_chrome_turns_solid_past_threshold() {
        let _owner = reactive_scope();
        let shell = provide_shell_context(&Config::default());

        let top = render_navbar();
        assert!(top.contains(NavChrome::Transparent.class()), "{top}");

        shell.scrolled_to(21.0);
        let scrolled = render_navbar();
        assert!(scrolled.contains(NavChrome::Solid.class()), "{scrolled}");
        assert!(!scrolled.contains(NavChrome::Transparent.class()), "{scrolled}");
    }
}
