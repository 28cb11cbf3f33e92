//! Output formatting module

pub mod json;
