//! # Section Loader Sequence
//!
//! The landing page below the hero is an ordered list of deferred sections. Each one starts
//! `Pending` (showing its [`Fallback`]) and is swapped in place once it settles. The page
//! renders every slot straight from its [`SectionState`], so resolution order never changes
//! the layout order.
//!
//! ```rust
//! use lib_core::content;
//! use lib_core::sections::{SectionId, SectionSequence, SectionState};
//!
//! let mut seq = SectionSequence::new();
//! assert_eq!(seq.pending_count(), SectionId::ALL.len());
//!
//! seq.settle(SectionId::Footer, content::load(SectionId::Footer));
//! assert!(matches!(seq.state(SectionId::Footer), Some(SectionState::Ready(_))));
//! assert!(seq.state(SectionId::Statistics).is_some_and(SectionState::is_pending));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::SectionContent;

/// Deferred sections in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Statistics,
    IdeaGenerator,
    Comparison,
    Process,
    BackstageGallery,
    CasesCta,
    WorkFormats,
    Footer,
    ScrollToTop,
}

impl SectionId {
    /// Declaration order, top to bottom.
    pub const ALL: [SectionId; 9] = [
        SectionId::Statistics,
        SectionId::IdeaGenerator,
        SectionId::Comparison,
        SectionId::Process,
        SectionId::BackstageGallery,
        SectionId::CasesCta,
        SectionId::WorkFormats,
        SectionId::Footer,
        SectionId::ScrollToTop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Statistics => "statistics",
            SectionId::IdeaGenerator => "idea_generator",
            SectionId::Comparison => "comparison",
            SectionId::Process => "process",
            SectionId::BackstageGallery => "backstage_gallery",
            SectionId::CasesCta => "cases_cta",
            SectionId::WorkFormats => "work_formats",
            SectionId::Footer => "footer",
            SectionId::ScrollToTop => "scroll_to_top",
        }
    }

    /// Human-readable title, used in error notices.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Statistics => "Цифры",
            SectionId::IdeaGenerator => "AI Идеи",
            SectionId::Comparison => "Сравнение",
            SectionId::Process => "Процесс",
            SectionId::BackstageGallery => "Бэкстейдж",
            SectionId::CasesCta => "Кейсы",
            SectionId::WorkFormats => "Форматы",
            SectionId::Footer => "Контакты",
            SectionId::ScrollToTop => "Наверх",
        }
    }

    /// In-page fragment target rendered by this section, if any.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::IdeaGenerator => Some("generator"),
            SectionId::WorkFormats => Some("formats"),
            SectionId::Footer => Some("contact"),
            _ => None,
        }
    }

    /// Placeholder shown while the section is pending.
    pub fn fallback(self) -> Fallback {
        match self {
            // No layout footprint until it is shown.
            SectionId::ScrollToTop => Fallback::Empty,
            _ => Fallback::Spinner,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a pending section shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    /// Fixed-height band with a rotating spinner.
    Spinner,
    /// Nothing at all.
    Empty,
}

/// A deferred section failed to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("section '{section}' failed to load: {reason}")]
pub struct SectionError {
    pub section: SectionId,
    pub reason: String,
}

impl SectionError {
    pub fn new(section: SectionId, reason: impl Into<String>) -> Self {
        Self {
            section,
            reason: reason.into(),
        }
    }
}

/// Resolution state of one section slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SectionState {
    #[default]
    Pending,
    Ready(SectionContent),
    Failed(SectionError),
}

impl SectionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SectionState::Pending)
    }

    fn label(&self) -> &'static str {
        match self {
            SectionState::Pending => "pending",
            SectionState::Ready(_) => "ready",
            SectionState::Failed(_) => "failed",
        }
    }
}

impl From<Result<SectionContent, SectionError>> for SectionState {
    fn from(outcome: Result<SectionContent, SectionError>) -> Self {
        match outcome {
            Ok(content) => SectionState::Ready(content),
            Err(err) => SectionState::Failed(err),
        }
    }
}

/// Ordered table of section slots, one per entry of [`SectionId::ALL`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionSequence {
    slots: Vec<(SectionId, SectionState)>,
}

impl SectionSequence {
    /// Every section, all pending.
    pub fn new() -> Self {
        Self {
            slots: SectionId::ALL
                .into_iter()
                .map(|id| (id, SectionState::Pending))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn state(&self, id: SectionId) -> Option<&SectionState> {
        self.slots.iter().find(|(slot, _)| *slot == id).map(|(_, state)| state)
    }

    /// Record how `id` resolved. A slot settles once; returns `false` if it already had.
    pub fn settle(&mut self, id: SectionId, outcome: Result<SectionContent, SectionError>) -> bool {
        match self.slots.iter_mut().find(|(slot, _)| *slot == id) {
            Some((_, state)) if state.is_pending() => {
                *state = SectionState::from(outcome);
                tracing::debug!(section = %id, state = state.label(), "section settled");
                true
            }
            _ => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.slots.iter().filter(|(_, state)| state.is_pending()).count()
    }

    /// True once no slot is pending.
    pub fn is_settled(&self) -> bool {
        self.pending_count() == 0
    }

    /// First failure in page order, if any.
    pub fn first_error(&self) -> Option<&SectionError> {
        self.slots.iter().find_map(|(_, state)| match state {
            SectionState::Failed(err) => Some(err),
            _ => None,
        })
    }
}

impl Default for SectionSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use pretty_assertions::assert_eq;

    fn failure(id: SectionId) -> Result<SectionContent, SectionError> {
        Err(SectionError::new(id, "invalid content"))
    }

    #[test]
    fn test_eight_spinners_and_one_empty() {
        let spinners = SectionId::ALL
            .iter()
            .filter(|id| id.fallback() == Fallback::Spinner)
            .count();
        assert_eq!(spinners, 8);
        assert_eq!(SectionId::ScrollToTop.fallback(), Fallback::Empty);
    }

    #[test]
    fn test_out_of_order_resolution_keeps_page_order() {
        let mut seq = SectionSequence::new();
        for id in SectionId::ALL.iter().rev() {
            assert!(seq.settle(*id, content::load(*id)));
        }
        assert!(seq.is_settled());

        let order: Vec<_> = seq.slots.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, SectionId::ALL.to_vec());
        for id in SectionId::ALL {
            match seq.state(id) {
                Some(SectionState::Ready(content)) => assert_eq!(content.id(), id),
                other => panic!("{} not ready: {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_only_the_settled_slot_leaves_pending() {
        let mut seq = SectionSequence::new();
        seq.settle(SectionId::Comparison, content::load(SectionId::Comparison));

        let placeholders: Vec<_> = SectionId::ALL
            .into_iter()
            .filter(|id| seq.state(*id).is_some_and(SectionState::is_pending))
            .map(SectionId::fallback)
            .collect();
        assert_eq!(placeholders.len(), 8);
        assert_eq!(placeholders.iter().filter(|f| **f == Fallback::Spinner).count(), 7);
    }

    #[test]
    fn test_settle_is_once_only() {
        let mut seq = SectionSequence::new();
        assert!(seq.settle(SectionId::ScrollToTop, Ok(SectionContent::ScrollToTop)));
        assert!(!seq.settle(SectionId::ScrollToTop, failure(SectionId::ScrollToTop)));
        assert_eq!(
            seq.state(SectionId::ScrollToTop),
            Some(&SectionState::Ready(SectionContent::ScrollToTop))
        );
    }

    #[test]
    fn test_first_error_follows_page_order() {
        let mut seq = SectionSequence::new();
        seq.settle(SectionId::WorkFormats, failure(SectionId::WorkFormats));
        seq.settle(SectionId::Statistics, failure(SectionId::Statistics));
        assert_eq!(seq.first_error().map(|e| e.section), Some(SectionId::Statistics));
        assert_eq!(seq.pending_count(), 7);
        assert!(!seq.is_settled());
    }

    #[test]
    fn test_state_from_outcome() {
        assert_eq!(
            SectionState::from(Ok(SectionContent::ScrollToTop)),
            SectionState::Ready(SectionContent::ScrollToTop)
        );
        assert!(matches!(
            SectionState::from(failure(SectionId::Footer)),
            SectionState::Failed(_)
        ));
    }
}
