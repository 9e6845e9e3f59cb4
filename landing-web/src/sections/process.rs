//! Production steps

use leptos::prelude::*;
use lib_core::content;

#[component]
pub fn Process(content: content::Process) -> impl IntoView {
    let steps = content
        .steps
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            view! {
                <li class="relative p-6 rounded-3xl bg-white/70 border border-white/60 shadow-sm">
                    <span class="text-5xl font-bold text-red-600/20">{format!("{:02}", index + 1)}</span>
                    <h3 class="mt-2 text-xl font-bold text-gray-900">{step.title}</h3>
                    <p class="mt-2 text-gray-600">{step.description}</p>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold tracking-tight text-center mb-12">{content.heading}</h2>
                <ol class="grid md:grid-cols-4 gap-6">{steps}</ol>
            </div>
        </section>
    }
}
