//! Floating scroll-to-top button, shown once the page is scrolled well past the hero

use leptos::prelude::*;

use crate::components::icons::{Icon, ICON_ARROW_UP};
use crate::services::scroll::scroll_to_top;
use crate::state::shell::use_shell_context;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let shell = use_shell_context();

    view! {
        <Show when=move || shell.show_scroll_to_top()>
            <button
                class="fixed bottom-6 right-6 z-30 p-3 rounded-full bg-gray-900 text-white shadow-xl hover:scale-110 transition-transform"
                on:click=move |_| scroll_to_top()
                aria-label="Наверх"
            >
                <Icon path=ICON_ARROW_UP class="w-5 h-5"/>
            </button>
        </Show>
    }
}
