//! Application constants

/// Timer delay before a deferred section decodes. Zero defers to the next task, not a frame.
pub const SECTION_DEFER_MS: u32 = 0;

/// Exit transition of the mobile overlay; must match `.overlay-leave` in `style.css`.
pub const OVERLAY_HIDE_MS: u64 = 300;

// Background blobs
pub const BACKGROUND_BLOB_COUNT: usize = 6;
