//! Integration test utilities for the memo stores
//!
//! This crate provides helpers for running end-to-end scenarios through the
//! service layer against a fresh database.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
