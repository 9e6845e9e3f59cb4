//! Pricing cards

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::content;
use lib_core::SectionId;

use crate::components::icons::{Icon, ICON_CHECK};
use crate::utils::format::format_price_from;

#[component]
pub fn WorkFormats(content: content::WorkFormats) -> impl IntoView {
    let contact = &core_config().contact;

    let cards = content
        .formats
        .into_iter()
        .map(|format| {
            let class = if format.featured {
                "relative p-8 rounded-3xl bg-gray-900 text-white shadow-2xl md:scale-105"
            } else {
                "relative p-8 rounded-3xl bg-white/80 backdrop-blur-md border border-gray-100 shadow-sm"
            };
            let features = format
                .features
                .into_iter()
                .map(|feature| {
                    view! {
                        <li class="flex items-start gap-2">
                            <Icon path=ICON_CHECK class="w-5 h-5 shrink-0 text-red-500"/>
                            {feature}
                        </li>
                    }
                })
                .collect_view();

            view! {
                <div class=class>
                    <h3 class="text-xl font-bold">{format.name}</h3>
                    <p class="mt-1 text-sm opacity-70">{format.duration}</p>
                    <p class="mt-6 text-3xl font-bold tracking-tight">{format_price_from(format.price_from)}</p>
                    <ul class="mt-6 space-y-3 text-sm">{features}</ul>
                    <a
                        href=contact.href.clone()
                        target="_blank"
                        rel="noreferrer"
                        class="block mt-8 px-6 py-3 text-center font-medium rounded-full bg-red-600 text-white hover:bg-red-700 transition-colors"
                    >
                        "Обсудить"
                    </a>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id=SectionId::WorkFormats.anchor() class="py-24 px-6 scroll-mt-20">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-5xl font-bold tracking-tight text-center mb-14">{content.heading}</h2>
                <div class="grid md:grid-cols-3 gap-6 items-center">{cards}</div>
            </div>
        </section>
    }
}
