//! Footer with contacts

use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::content;
use lib_core::SectionId;

#[component]
pub fn Footer(content: content::Footer) -> impl IntoView {
    let config = core_config();

    view! {
        <footer id=SectionId::Footer.anchor() class="py-16 px-6 border-t border-gray-100 scroll-mt-20">
            <div class="max-w-6xl mx-auto flex flex-col md:flex-row justify-between gap-8">
                <div>
                    <div class="text-xl font-bold tracking-tighter text-gray-900">
                        {config.brand.name.clone()} " "
                        <span class="text-red-600">{config.brand.accent.clone()}</span>
                    </div>
                    <p class="mt-3 text-gray-500 max-w-sm">{content.tagline}</p>
                </div>
                <div class="flex flex-col items-start md:items-end gap-3">
                    <a
                        href=config.contact.href.clone()
                        target="_blank"
                        rel="noreferrer"
                        class="px-6 py-3 bg-gray-900 text-white font-medium rounded-full hover:bg-gray-800 transition-colors"
                    >
                        {config.contact.label.clone()}
                    </a>
                    <span class="text-sm text-gray-400">{content.copyright}</span>
                </div>
            </div>
        </footer>
    }
}
