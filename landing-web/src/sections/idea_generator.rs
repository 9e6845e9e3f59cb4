//! Idea generator
//!
//! Picks a video idea from the embedded deck. Each click draws a different idea than the one
//! on screen.

use leptos::prelude::*;
use lib_core::content::{self, pick_next};
use lib_core::SectionId;

use crate::components::icons::{Icon, ICON_SPARKLES};

#[component]
pub fn IdeaGenerator(content: content::IdeaGenerator) -> impl IntoView {
    let deck = StoredValue::new(content.ideas);
    let current = RwSignal::new(None::<usize>);

    let on_generate = move |_| {
        let len = deck.with_value(|ideas| ideas.len());
        let next = pick_next(current.get_untracked(), len, js_sys::Math::random());
        log::debug!("Idea picked: {:?}", next);
        current.set(next);
    };

    let card = move || {
        current
            .get()
            .and_then(|index| deck.with_value(|ideas| ideas.get(index).cloned()))
            .map(|idea| {
                view! {
                    <div class="idea-card mt-10 p-8 rounded-3xl bg-white border border-gray-100 shadow-xl text-left">
                        <span class="text-xs font-semibold tracking-widest uppercase text-red-600">{idea.format}</span>
                        <h3 class="mt-3 text-2xl font-bold text-gray-900">{idea.title}</h3>
                        <p class="mt-3 text-gray-600">{idea.hook}</p>
                    </div>
                }
            })
    };

    view! {
        <section id=SectionId::IdeaGenerator.anchor() class="py-24 px-6 scroll-mt-20">
            <div class="max-w-3xl mx-auto text-center">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight mb-4">{content.heading}</h2>
                <p class="text-gray-600 mb-8">{content.subheading}</p>
                <button
                    class="inline-flex items-center gap-2 px-8 py-4 bg-red-600 text-white font-medium rounded-full shadow-lg hover:bg-red-700 active:scale-95 transition"
                    on:click=on_generate
                >
                    <Icon path=ICON_SPARKLES class="w-5 h-5"/>
                    {content.button_label}
                </button>
                {card}
            </div>
        </section>
    }
}
