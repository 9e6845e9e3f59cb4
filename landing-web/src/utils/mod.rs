//! Small helpers shared by sections

pub mod constants;
pub mod format;
#[cfg(test)]
pub mod testing;
