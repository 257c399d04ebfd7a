//! Miola Core - Shared catalog types and mutation logic.
//!
//! This crate provides the storefront image catalog model used by the
//! server:
//! - four fixed sections (main, women, men, kids)
//! - categories within a section, with an extra clothing-type level
//!   under main-section categories only
//! - capped, insertion-ordered image lists
//!
//! # Architecture
//!
//! The core crate contains only types and pure mutation logic - no I/O,
//! no HTTP, no filesystem access. Persistence and transport live in the
//! server crate.
//!
//! # Modules
//!
//! - [`types`] - Image, section, and scope types plus list resolution
//! - [`catalog`] - The four-section catalog and its snapshot form

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError, CatalogSnapshot};
pub use types::*;
