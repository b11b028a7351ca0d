//! # pterodactyl-core
//!
//! Core types and utilities for working with the Pterodactyl panel client API.
//!
//! This crate provides the shared error type, panel target configuration, HTTP client
//! settings and strongly-typed identifiers used by `pterodactyl-client`.
//!
//! ## Modules
//!
//! - [`error`] - Error types and the panel's structured error payload
//! - [`uuid`] - Strongly-typed UUID wrappers for panel resources
//! - [`config`] - Panel target descriptor and backup wait configuration
//! - [`client`] - HTTP client settings
//! - [`form`] - Builder for form-urlencoded request fields

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod uuid;

// Re-export commonly used types
pub use error::{ApiErrorDetail, ApiErrors, Error, Result};
