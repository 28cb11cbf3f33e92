//! Build helpers that pin docker build inputs. Exposes modules for the
//! binaries and integration tests.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod output;
