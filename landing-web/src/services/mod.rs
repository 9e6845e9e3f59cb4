//! Browser-facing services: scroll sampling and deferred section loading

pub mod scroll;
pub mod sections;
