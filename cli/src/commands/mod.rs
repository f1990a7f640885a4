//! Command implementations

pub mod push;
pub mod version;
