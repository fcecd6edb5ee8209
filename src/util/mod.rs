//! Small utility helpers shared across modules.

pub mod config;
