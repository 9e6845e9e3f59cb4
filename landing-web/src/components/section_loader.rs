//! Deferred sections and their loading placeholder

use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_core::sections::SectionSequence;
use lib_core::{Fallback, SectionError, SectionId, SectionState};

use crate::components::icons::{Icon, ICON_LOADER};
use crate::sections::render_section;
use crate::services::sections::load_section;

/// Fixed-height band with a spinning loader, shown while a section is pending.
#[component]
fn SectionLoader() -> impl IntoView {
    view! {
        <div class="w-full h-40 flex items-center justify-center" role="status" aria-label="Загрузка">
            <Icon path=ICON_LOADER class="w-8 h-8 animate-spin text-gray-300"/>
        </div>
    }
}

/// A section that resolves asynchronously and replaces its placeholder in place.
///
/// The outcome is written into `sequence`, and the slot renders from there. Failures come out
/// as `Err` so they reach the nearest `ErrorBoundary`. When the page is gone before loading
/// finishes, the result is dropped.
#[component]
pub fn Deferred(
    section: SectionId,
    /// Page-wide slot table, settled once this section resolves or fails
    sequence: RwSignal<SectionSequence>,
) -> impl IntoView {
    spawn_local(async move {
        let loaded = load_section(section).await;
        if sequence.try_update(|seq| seq.settle(section, loaded)).is_none() {
            log::debug!("Section '{}' finished after teardown, result discarded", section);
        }
    });

    section_slot(section, sequence)
}

/// Reactive view of one slot: its fallback while pending, then the section or its error.
pub(crate) fn section_slot(
    section: SectionId,
    sequence: RwSignal<SectionSequence>,
) -> impl Fn() -> Result<AnyView, SectionError> + Send + Sync + Clone + 'static {
    let state = Memo::new(move |_| {
        sequence.with(|seq| seq.state(section).cloned().unwrap_or_default())
    });

    move || match state.get() {
        SectionState::Pending => Ok(placeholder(section.fallback())),
        SectionState::Ready(content) => Ok(render_section(content)),
        SectionState::Failed(err) => Err(err),
    }
}

fn placeholder(fallback: Fallback) -> AnyView {
    match fallback {
        Fallback::Spinner => view! { <SectionLoader/> }.into_any(),
        Fallback::Empty => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::shell::provide_shell_context;
    use crate::utils::testing::reactive_scope;
    use leptos::tachys::view::RenderHtml;
    use lib_core::{content, Config};

    fn render(slot: impl Fn() -> Result<AnyView, SectionError>) -> Result<String, SectionError> {
        slot().map(|view| view.to_html())
    }

    #[test]
    fn test_spinner_is_replaced_in_place() {
        let _owner = reactive_scope();
        let sequence = RwSignal::new(SectionSequence::new());
        let slot = section_slot(SectionId::WorkFormats, sequence);

        let pending = render(slot.clone()).unwrap();
        assert!(pending.contains("role=\"status\""), "{pending}");
        assert!(pending.contains("animate-spin"), "{pending}");

        sequence.update(|seq| {
            seq.settle(SectionId::WorkFormats, content::load(SectionId::WorkFormats));
        });

        let ready = render(slot).unwrap();
        assert!(!ready.contains("role=\"status\""), "{ready}");
        assert!(ready.contains("id=\"formats\""), "{ready}");
    }

    #[test]
    fn test_scroll_to_top_has_no_placeholder() {
        let _owner = reactive_scope();
        let sequence = RwSignal::new(SectionSequence::new());
        let html = render(section_slot(SectionId::ScrollToTop, sequence)).unwrap();
        assert!(!html.contains("role=\"status\""), "{html}");
        assert!(!html.contains("<div"), "{html}");
    }

    #[test]
    fn test_other_slots_stay_pending() {
        let _owner = reactive_scope();
        let sequence = RwSignal::new(SectionSequence::new());
        sequence.update(|seq| {
            seq.settle(SectionId::Footer, content::load(SectionId::Footer));
        });

        let statistics = render(section_slot(SectionId::Statistics, sequence)).unwrap();
        assert!(statistics.contains("animate-spin"), "{statistics}");
    }

    #[test]
    fn test_failed_slot_yields_its_error() {
        let _owner = reactive_scope();
        let sequence = RwSignal::new(SectionSequence::new());
        sequence.update(|seq| {
            seq.settle(
                SectionId::Process,
                Err(SectionError::new(SectionId::Process, "invalid content")),
            );
        });

        let err = render(section_slot(SectionId::Process, sequence)).unwrap_err();
        assert_eq!(err.section, SectionId::Process);
    }

    #[test]
    fn test_deferred_mounts_with_its_placeholder() {
        let _owner = reactive_scope();
        provide_shell_context(&Config::default());
        let sequence = RwSignal::new(SectionSequence::new());

        let html = view! { <Deferred section=SectionId::Comparison sequence=sequence/> }.to_html();
        assert!(html.contains("role=\"status\""), "{html}");
        assert_eq!(sequence.with_untracked(|seq| seq.pending_count()), SectionId::ALL.len());
    }
}
