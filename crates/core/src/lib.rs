//! Satellite billing core - shared types library.
//!
//! This crate provides the types shared by the billing client and its
//! command-line surface:
//! - `client` - GraphQL data-access layer for payment methods
//! - `cli` - Command-line tools over the client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - String ID newtypes, payment methods, and the operation result wrapper

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
