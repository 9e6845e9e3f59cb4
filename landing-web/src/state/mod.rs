//! Reactive state shared across components

pub mod shell;
