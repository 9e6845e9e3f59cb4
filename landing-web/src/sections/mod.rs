//! Page sections
//!
//! `Hero` renders eagerly; everything else is mounted through `Deferred` once its content
//! has resolved.

pub mod backstage_gallery;
pub mod cases_cta;
pub mod comparison;
pub mod footer;
pub mod hero;
pub mod idea_generator;
pub mod process;
pub mod scroll_to_top;
pub mod statistics;
pub mod work_formats;

use leptos::prelude::*;
use lib_core::content::SectionContent;

pub use backstage_gallery::BackstageGallery;
pub use cases_cta::CasesCta;
pub use comparison::Comparison;
pub use footer::Footer;
pub use hero::Hero;
pub use idea_generator::IdeaGenerator;
pub use process::Process;
pub use scroll_to_top::ScrollToTop;
pub use statistics::Statistics;
pub use work_formats::WorkFormats;

/// Mount the view for resolved section content.
pub fn render_section(content: SectionContent) -> AnyView {
    match content {
        SectionContent::Statistics(content) => view! { <Statistics content=content/> }.into_any(),
        SectionContent::IdeaGenerator(content) => view! { <IdeaGenerator content=content/> }.into_any(),
        SectionContent::Comparison(content) => view! { <Comparison content=content/> }.into_any(),
        SectionContent::Process(content) => view! { <Process content=content/> }.into_any(),
        SectionContent::BackstageGallery(content) => view! { <BackstageGallery content=content/> }.into_any(),
        SectionContent::CasesCta(content) => view! { <CasesCta content=content/> }.into_any(),
        SectionContent::WorkFormats(content) => view! { <WorkFormats content=content/> }.into_any(),
        SectionContent::Footer(content) => view! { <Footer content=content/> }.into_any(),
        SectionContent::ScrollToTop => view! { <ScrollToTop/> }.into_any(),
    }
}
