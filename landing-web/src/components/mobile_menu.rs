//! Mobile Menu Overlay
//!
//! Full-screen panel shown on small viewports while the menu is open. It is mounted when the
//! menu opens and stays mounted for [`OVERLAY_HIDE_MS`] after it closes, so the exit animation
//! can play. The panel itself carries the animation class, which keeps its `fixed inset-0`
//! box sized to the viewport while the backdrop blur is applied.

use std::time::Duration;

use leptos::prelude::*;
use lib_core::config::core_config;

use crate::state::shell::use_shell_context;
use crate::utils::constants::OVERLAY_HIDE_MS;

const PANEL_ENTER: &str = "fixed inset-0 z-40 md:hidden bg-white/95 flex flex-col items-center justify-center space-y-8 overlay-enter";
const PANEL_LEAVE: &str = "fixed inset-0 z-40 md:hidden bg-white/95 flex flex-col items-center justify-center space-y-8 overlay-leave";

fn panel_class(open: bool) -> &'static str {
    if open {
        PANEL_ENTER
    } else {
        PANEL_LEAVE
    }
}

#[component]
pub fn MobileMenu() -> impl IntoView {
    let shell = use_shell_context();
    let mounted = RwSignal::new(shell.shell.with_untracked(|s| s.menu().is_open()));
    let exit_timer = StoredValue::new(None::<TimeoutHandle>);

    Effect::watch(
        move || shell.is_menu_open(),
        move |open, _, _| {
            if let Some(timer) = exit_timer.get_value() {
                timer.clear();
            }
            if *open {
                mounted.set(true);
                return;
            }

            match set_timeout_with_handle(
                move || {
                    mounted.try_set(false);
                },
                Duration::from_millis(OVERLAY_HIDE_MS),
            ) {
                Ok(timer) => exit_timer.set_value(Some(timer)),
                Err(err) => {
                    log::warn!("Overlay exit timer failed: {:?}", err);
                    mounted.set(false);
                }
            }
        },
        false,
    );

    on_cleanup(move || {
        if let Some(Some(timer)) = exit_timer.try_get_value() {
            timer.clear();
        }
    });

    let class = Signal::derive(move || panel_class(shell.is_menu_open()));

    view! {
        <Show when=move || mounted.get()>
            <MobileMenuPanel class=class/>
        </Show>
    }
}

#[component]
fn MobileMenuPanel(class: Signal<&'static str>) -> impl IntoView {
    let shell = use_shell_context();
    let config = core_config();
    let close = move |_| shell.link_activated();

    let links = config
        .nav_links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href.clone()
                    on:click=close
                    class="text-3xl font-bold text-gray-900 hover:text-red-600 transition-colors"
                >
                    {link.label.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class=move || class.get()>
            <div class="overlay-items flex flex-col items-center gap-8">
                {links}

                <div class="w-12 h-1 bg-red-500 rounded-full opacity-20"></div>

                <a
                    href=config.contact.href.clone()
                    target="_blank"
                    rel="noreferrer"
                    on:click=close
                    class="px-8 py-4 bg-gray-900 text-white text-lg font-medium rounded-2xl shadow-xl active:scale-95 transition-transform"
                >
                    {config.contact.label.clone()}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shell::provide_shell_context;
    use crate::utils::testing::reactive_scope;
    use leptos::tachys::view::RenderHtml;
    use lib_core::Config;

    fn render_menu(open: bool) -> String {
        let _owner = reactive_scope();
        let shell = provide_shell_context(&Config::default());
        if open {
            shell.toggle_menu();
        }
        view! { <MobileMenu/> }.to_html()
    }

    #[test]
    fn test_closed_menu_renders_nothing() {
        let html = render_menu(false);
        assert!(!html.contains("fixed inset-0"), "{html}");
        assert!(!html.contains("Связаться в Telegram"), "{html}");
    }

    #[test]
    fn test_open_panel_is_the_animated_element() {
        let html = render_menu(true);
        assert!(html.contains(&format!("class=\"{}\"", PANEL_ENTER)), "{html}");
        assert!(!html.contains("class=\"overlay-enter\""), "{html}");
    }

    #[test]
    fn test_open_panel_lists_links_and_contact() {
        let html = render_menu(true);
        for link in &Config::default().nav_links {
            assert!(html.contains(&link.label), "missing {}", link.label);
        }
        assert!(html.contains("https://t.me/bai_khairullin"));
    }

    #[test]
    fn test_leaving_panel_keeps_full_screen_layout() {
        assert!(panel_class(false).starts_with("fixed inset-0 z-40"));
        assert!(panel_class(false).ends_with("overlay-leave"));
        assert!(panel_class(true).ends_with("overlay-enter"));
    }
}
