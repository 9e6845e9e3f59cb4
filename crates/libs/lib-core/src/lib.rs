//! # Core Library
//!
//! Target-independent logic of the landing page shell: scroll threshold tracking, the mobile
//! menu state machine, navbar styling, the deferred section sequence, section content and
//! configuration. Nothing here touches the DOM, so all of it is tested natively.

pub mod config;
pub mod content;
pub mod error;
pub mod menu;
pub mod navbar;
pub mod scroll;
pub mod sections;
pub mod shell;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use menu::{MenuEvent, MenuState};
pub use navbar::NavbarStyle;
pub use sections::{Fallback, SectionError, SectionId, SectionState};
pub use shell::{ShellEvent, ShellState};
