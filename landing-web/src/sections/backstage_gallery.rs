//! Behind-the-scenes gallery

use leptos::prelude::*;
use lib_core::content;

#[component]
pub fn BackstageGallery(content: content::BackstageGallery) -> impl IntoView {
    let shots = content
        .shots
        .into_iter()
        .map(|shot| {
            let class = format!(
                "aspect-[4/5] rounded-3xl bg-gradient-to-br {} flex items-end p-5 shadow-sm",
                shot.tone.class()
            );
            view! {
                <figure class=class>
                    <figcaption class="text-sm font-medium text-gray-800">{shot.caption}</figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <section class="py-20 px-6">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold tracking-tight mb-12">{content.heading}</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">{shots}</div>
            </div>
        </section>
    }
}
