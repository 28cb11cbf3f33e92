//! Command implementations

pub mod lock_images;
pub mod version_vars;
