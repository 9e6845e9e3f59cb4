//! Hero - first screen, rendered eagerly

use leptos::prelude::*;
use lib_core::config::core_config;

#[component]
pub fn Hero() -> impl IntoView {
    let config = core_config();

    view! {
        <section class="relative min-h-screen flex items-center justify-center px-6 pt-32 pb-20">
            <div class="max-w-4xl mx-auto text-center">
                <p class="inline-block mb-6 px-4 py-1.5 text-xs font-semibold tracking-widest uppercase text-red-600 bg-red-50 rounded-full">
                    "Видеопродакшн"
                </p>
                <h1 class="text-5xl md:text-7xl font-bold tracking-tighter text-gray-900 leading-[1.05] mb-8">
                    "Снимаем видео, которое "
                    <span class="text-red-600">"продаёт"</span>
                </h1>
                <p class="text-lg md:text-xl text-gray-600 max-w-2xl mx-auto mb-10">
                    "Reels, имиджевые ролики и интервью для брендов. От идеи до готового монтажа за неделю."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="#generator"
                        class="px-8 py-4 bg-gray-900 text-white font-medium rounded-full shadow-xl hover:scale-105 transition-transform"
                    >
                        "Придумать идею"
                    </a>
                    <a
                        href=config.contact.href.clone()
                        target="_blank"
                        rel="noreferrer"
                        class="px-8 py-4 bg-white/70 backdrop-blur-md text-gray-900 font-medium rounded-full border border-gray-200 hover:bg-white transition-colors"
                    >
                        {config.contact.label.clone()}
                    </a>
                </div>
            </div>
        </section>
    }
}
