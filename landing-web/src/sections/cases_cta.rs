//! Cases call to action

use leptos::prelude::*;
use lib_core::content;

#[component]
pub fn CasesCta(content: content::CasesCta) -> impl IntoView {
    view! {
        <section class="py-20 px-6">
            <div class="max-w-5xl mx-auto p-10 md:p-16 rounded-[2.5rem] bg-gray-900 text-white text-center shadow-2xl">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight">{content.heading}</h2>
                <p class="mt-6 text-lg text-gray-300 max-w-2xl mx-auto">{content.text}</p>
                <a
                    href=content.button.href
                    class="inline-block mt-10 px-8 py-4 bg-white text-gray-900 font-medium rounded-full hover:scale-105 transition-transform"
                >
                    {content.button.label}
                </a>
            </div>
        </section>
    }
}
