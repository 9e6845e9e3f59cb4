//! # Section Content
//!
//! Copy for every deferred section lives in JSON documents under `data/sections/` and is
//! compiled into the bundle. Resolving a section means decoding its document into the typed
//! DTOs below; a document that does not decode is a [`SectionError`].
//!
//! ## Structure
//!
//! - [`SectionContent`]: one variant per [`SectionId`]
//! - [`load`]: decode the embedded document for a section
//! - [`ideas`]: offline idea picker used by the generator section

pub mod ideas;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::NavLink;
use crate::sections::{SectionError, SectionId};

pub use ideas::{pick_next, Idea};

/// One headline figure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: u64,
    #[serde(default)]
    pub suffix: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub heading: String,
    pub items: Vec<Stat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaGenerator {
    pub heading: String,
    pub subheading: String,
    pub button_label: String,
    pub ideas: Vec<Idea>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub aspect: String,
    pub ours: String,
    pub theirs: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub heading: String,
    pub ours_label: String,
    pub theirs_label: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub heading: String,
    pub steps: Vec<Step>,
}

/// Gradient family for a gallery tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warm,
    Cool,
    Neutral,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Warm => "from-red-200 via-orange-100 to-white",
            Tone::Cool => "from-sky-200 via-indigo-100 to-white",
            Tone::Neutral => "from-gray-200 via-gray-100 to-white",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub caption: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackstageGallery {
    pub heading: String,
    pub shots: Vec<Shot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasesCta {
    pub heading: String,
    pub text: String,
    pub button: NavLink,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkFormat {
    pub name: String,
    /// Starting price in roubles.
    pub price_from: u64,
    pub duration: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkFormats {
    pub heading: String,
    pub formats: Vec<WorkFormat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub copyright: String,
}

/// Decoded content of a resolved section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionContent {
    Statistics(Statistics),
    IdeaGenerator(IdeaGenerator),
    Comparison(Comparison),
    Process(Process),
    BackstageGallery(BackstageGallery),
    CasesCta(CasesCta),
    WorkFormats(WorkFormats),
    Footer(Footer),
    /// Behaviour only, no copy.
    ScrollToTop,
}

impl SectionContent {
    pub fn id(&self) -> SectionId {
        match self {
            SectionContent::Statistics(_) => SectionId::Statistics,
            SectionContent::IdeaGenerator(_) => SectionId::IdeaGenerator,
            SectionContent::Comparison(_) => SectionId::Comparison,
            SectionContent::Process(_) => SectionId::Process,
            SectionContent::BackstageGallery(_) => SectionId::BackstageGallery,
            SectionContent::CasesCta(_) => SectionId::CasesCta,
            SectionContent::WorkFormats(_) => SectionId::WorkFormats,
            SectionContent::Footer(_) => SectionId::Footer,
            SectionContent::ScrollToTop => SectionId::ScrollToTop,
        }
    }
}

/// Embedded document for `id`, or `None` for sections without copy.
pub fn embedded(id: SectionId) -> Option<&'static str> {
    match id {
        SectionId::Statistics => Some(include_str!("../../data/sections/statistics.json")),
        SectionId::IdeaGenerator => Some(include_str!("../../data/sections/idea_generator.json")),
        SectionId::Comparison => Some(include_str!("../../data/sections/comparison.json")),
        SectionId::Process => Some(include_str!("../../data/sections/process.json")),
        SectionId::BackstageGallery => Some(include_str!("../../data/sections/backstage_gallery.json")),
        SectionId::CasesCta => Some(include_str!("../../data/sections/cases_cta.json")),
        SectionId::WorkFormats => Some(include_str!("../../data/sections/work_formats.json")),
        SectionId::Footer => Some(include_str!("../../data/sections/footer.json")),
        SectionId::ScrollToTop => None,
    }
}

/// Decode `raw` as the document for `id`.
pub fn decode<T: DeserializeOwned>(id: SectionId, raw: &str) -> Result<T, SectionError> {
    serde_json::from_str(raw).map_err(|e| SectionError::new(id, format!("invalid content: {}", e)))
}

/// Decode the embedded content for `id`.
pub fn load(id: SectionId) -> Result<SectionContent, SectionError> {
    let Some(raw) = embedded(id) else {
        return Ok(SectionContent::ScrollToTop);
    };

    let content = match id {
        SectionId::Statistics => SectionContent::Statistics(decode(id, raw)?),
        SectionId::IdeaGenerator => {
            let generator: IdeaGenerator = decode(id, raw)?;
            if generator.ideas.is_empty() {
                return Err(SectionError::new(id, "idea list is empty"));
            }
            SectionContent::IdeaGenerator(generator)
        }
        SectionId::Comparison => SectionContent::Comparison(decode(id, raw)?),
        SectionId::Process => SectionContent::Process(decode(id, raw)?),
        SectionId::BackstageGallery => SectionContent::BackstageGallery(decode(id, raw)?),
        SectionId::CasesCta => SectionContent::CasesCta(decode(id, raw)?),
        SectionId::WorkFormats => SectionContent::WorkFormats(decode(id, raw)?),
        SectionId::Footer => SectionContent::Footer(decode(id, raw)?),
        SectionId::ScrollToTop => SectionContent::ScrollToTop,
    };
    Ok(content)
}
