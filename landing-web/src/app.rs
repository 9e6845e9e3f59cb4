//! Bai Production landing page - Leptos frontend
//!
//! Page shell: background, navbar, mobile overlay, eager hero and the deferred sections.

use leptos::error::Errors;
use leptos::prelude::*;
use lib_core::config::core_config;
use lib_core::sections::SectionSequence;
use lib_core::{AppError, SectionId};

use crate::components::{Background, Deferred, MobileMenu, Navbar};
use crate::sections::Hero;
use crate::services::scroll::use_scroll_observer;
use crate::state::shell::provide_shell_context;

#[component]
pub fn App() -> impl IntoView {
    let shell = provide_shell_context(core_config());
    use_scroll_observer(shell);

    let sequence = RwSignal::new(SectionSequence::new());
    Effect::new(move || {
        if sequence.with(|seq| seq.is_settled()) {
            log::info!("All {} sections settled", sequence.with_untracked(|seq| seq.len()));
        }
    });

    view! {
        <main class="relative min-h-screen text-gray-900 selection:bg-red-500/30 selection:text-red-900">
            <Background/>
            <Navbar/>
            <MobileMenu/>

            <Hero/>

            <DeferredSections sequence=sequence/>
        </main>
    }
}

/// Every deferred section in page order, behind one error boundary.
#[component]
fn DeferredSections(sequence: RwSignal<SectionSequence>) -> impl IntoView {
    let sections = SectionId::ALL
        .into_iter()
        .map(|section| view! { <Deferred section=section sequence=sequence/> })
        .collect_view();

    view! {
        <ErrorBoundary fallback=move |errors| {
            view! { <SectionErrorNotice errors=errors sequence=sequence/> }
        }>
            {sections}
        </ErrorBoundary>
    }
}

/// Notice rendered by the page boundary when a deferred section fails.
#[component]
fn SectionErrorNotice(errors: ArcRwSignal<Errors>, sequence: RwSignal<SectionSequence>) -> impl IntoView {
    Effect::new(move || {
        for (_, error) in errors.get() {
            log::error!("Section boundary caught: {}", error);
        }
    });

    let headline = move || {
        sequence.with(|seq| {
            seq.first_error()
                .map(|err| AppError::from(err.clone()).user_message())
                .unwrap_or_else(|| "Часть страницы не загрузилась".to_string())
        })
    };

    view! {
        <div class="w-full py-16 px-6 text-center text-gray-500" role="alert">
            <p class="text-lg font-medium text-gray-700">{headline}</p>
            <p class="mt-2">"Обновите страницу или напишите нам в Telegram."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::reactive_scope;
    use leptos::tachys::view::RenderHtml;
    use lib_core::{content, Config, SectionError};

    fn render_sections(sequence: RwSignal<SectionSequence>) -> String {
        view! { <DeferredSections sequence=sequence/> }.to_html()
    }

    #[test]
    fn test_failure_reaches_the_boundary() {
        let _owner = reactive_scope();
        provide_shell_context(&Config::default());
        let sequence = RwSignal::new(SectionSequence::new());
        sequence.update(|seq| {
            seq.settle(
                SectionId::Process,
                Err(SectionError::new(SectionId::Process, "invalid content")),
            );
        });

        let html = render_sections(sequence);
        assert!(html.contains("role=\"alert\""), "{html}");
        assert!(html.contains("Раздел «Процесс» временно недоступен"), "{html}");
        assert!(!html.contains("role=\"status\""), "{html}");
    }

    #[test]
    fn test_pending_page_shows_eight_spinners() {
        let _owner = reactive_scope();
        provide_shell_context(&Config::default());
        let sequence = RwSignal::new(SectionSequence::new());

        let html = render_sections(sequence);
        assert_eq!(html.matches("role=\"status\"").count(), 8, "{html}");
        assert!(!html.contains("role=\"alert\""), "{html}");
    }

    #[test]
    fn test_resolved_sections_keep_page_order() {
        let _owner = reactive_scope();
        provide_shell_context(&Config::default());
        let sequence = RwSignal::new(SectionSequence::new());
        sequence.update(|seq| {
            for id in SectionId::ALL.into_iter().rev() {
                seq.settle(id, content::load(id));
            }
        });

        let html = render_sections(sequence);
        assert!(!html.contains("role=\"status\""), "{html}");
        let generator = html.find("id=\"generator\"").expect("generator anchor");
        let formats = html.find("id=\"formats\"").expect("formats anchor");
        let contact = html.find("id=\"contact\"").expect("contact anchor");
        assert!(generator < formats && formats < contact);
    }
}
