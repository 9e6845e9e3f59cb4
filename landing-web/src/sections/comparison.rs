//! Us vs. the usual options

use leptos::prelude::*;
use lib_core::content;

use crate::components::icons::{Icon, ICON_CHECK};

#[component]
pub fn Comparison(content: content::Comparison) -> impl IntoView {
    let rows = content
        .rows
        .into_iter()
        .map(|row| {
            view! {
                <div class="grid grid-cols-3 gap-4 py-5 border-b border-gray-100 last:border-0">
                    <div class="font-medium text-gray-900">{row.aspect}</div>
                    <div class="flex items-start gap-2 text-gray-900">
                        <Icon path=ICON_CHECK class="w-5 h-5 shrink-0 text-red-600"/>
                        {row.ours}
                    </div>
                    <div class="text-gray-400">{row.theirs}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 px-6">
            <div class="max-w-5xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold tracking-tight text-center mb-12">{content.heading}</h2>
                <div class="p-6 md:p-10 rounded-3xl bg-white/80 backdrop-blur-md border border-gray-100 shadow-sm">
                    <div class="grid grid-cols-3 gap-4 pb-4 text-xs font-semibold uppercase tracking-widest text-gray-400">
                        <div></div>
                        <div class="text-red-600">{content.ours_label}</div>
                        <div>{content.theirs_label}</div>
                    </div>
                    {rows}
                </div>
            </div>
        </section>
    }
}
