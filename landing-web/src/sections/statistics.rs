//! Headline figures

use leptos::prelude::*;
use lib_core::content;

use crate::utils::format::format_stat;

#[component]
pub fn Statistics(content: content::Statistics) -> impl IntoView {
    let items = content
        .items
        .into_iter()
        .map(|stat| {
            view! {
                <div class="p-6 rounded-3xl bg-white/70 backdrop-blur-md border border-white/60 shadow-sm text-center">
                    <div class="text-4xl font-bold tracking-tight text-gray-900">
                        {format_stat(stat.value, &stat.suffix)}
                    </div>
                    <div class="mt-2 text-sm text-gray-500">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold tracking-tight text-center mb-12">{content.heading}</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-6">{items}</div>
            </div>
        </section>
    }
}
