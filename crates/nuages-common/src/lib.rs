//! # nuages-common
//!
//! Shared types, catalogs, error definitions, configuration models, and
//! constants used across the entire Nuages workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the primitives the controller, the terminal
//! dashboard, and the CLI build upon.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
