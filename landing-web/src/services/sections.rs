//! Deferred section loading

use gloo_timers::future::TimeoutFuture;
use lib_core::content::{self, SectionContent};
use lib_core::{SectionError, SectionId};

use crate::utils::constants::SECTION_DEFER_MS;

/// Resolve a section's content.
///
/// Waits one timer task first, so decoding runs after the page has mounted rather than
/// inside the initial render. That task may still run before the first paint.
pub async fn load_section(id: SectionId) -> Result<SectionContent, SectionError> {
    TimeoutFuture::new(SECTION_DEFER_MS).await;
    let outcome = content::load(id);
    match &outcome {
        Ok(_) => log::debug!("Section '{}' resolved", id),
        Err(err) => log::error!("{}", err),
    }
    outcome
}
