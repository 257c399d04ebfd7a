//! Miola catalog backend library.
//!
//! This crate provides the backend functionality as a library, allowing
//! it to be tested and reused.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod persist;
pub mod routes;
pub mod state;
pub mod upload;
