//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`AppError`] used by configuration loading,
//! content decoding and the deferred section sequence. It follows the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Startup** - [`Config`](AppError::Config): the embedded site configuration is missing a
//!    value or fails validation.
//! 2. **Content** - [`Decoding`](AppError::Decoding): an embedded JSON payload does not match
//!    its DTO.
//! 3. **Rendering** - [`Section`](AppError::Section): a deferred section failed to resolve. This
//!    is the only error that reaches the page, through the nearest error boundary.
//!
//! None of the navbar or menu transitions can fail, so they never produce an `AppError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::AppError;
//! use lib_core::Config;
//!
//! let err = Config::from_json("{ \"scroll_threshold_px\": \"twenty\" }").unwrap_err();
//! assert_eq!(err.code(), "Decoding");
//! assert_eq!(err.user_message(), "Что-то пошло не так");
//! assert!(matches!(err, AppError::Decoding(_)));
//! ```

use thiserror::Error;

use crate::sections::SectionError;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Crate-wide error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Configuration error during startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedded content could not be decoded into its DTO.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// A deferred section failed to resolve.
    #[error(transparent)]
    Section(#[from] SectionError),
}

impl AppError {
    /// Short machine-readable code, used as a log tag.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::Decoding(_) => "Decoding",
            AppError::Section(_) => "Section",
        }
    }

    /// Message safe to show on the page.
    ///
    /// Decoding and config details are internal, so they collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Section(err) => format!("Раздел «{}» временно недоступен", err.section.title()),
            AppError::Config(_) | AppError::Decoding(_) => "Что-то пошло не так".to_string(),
        }
    }
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;

    #[test]
    fn test_json_error_maps_to_decoding() {
        let err: AppError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
        assert_eq!(err.code(), "Decoding");
        assert!(err.to_string().starts_with("Decoding error: JSON error:"));
    }

    #[test]
    fn test_section_error_is_transparent() {
        let err: AppError = SectionError::new(SectionId::Process, "bad payload").into();
        assert_eq!(err.code(), "Section");
        assert_eq!(err.to_string(), "section 'process' failed to load: bad payload");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Decoding("line 3 column 7".to_string());
        assert_eq!(err.user_message(), "Что-то пошло не так");
    }

    #[test]
    fn test_section_message_names_the_section() {
        let err: AppError = SectionError::new(SectionId::WorkFormats, "decode").into();
        assert_eq!(err.user_message(), "Раздел «Форматы» временно недоступен");
    }
}
