//! Command implementations

pub mod host;
pub mod list;
