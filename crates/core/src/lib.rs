//! Marquee Core - Shared types library.
//!
//! This crate provides the wire types shared by the Marquee components:
//! - `dashboard` - Server-rendered booking dashboard
//! - `cli` - Command-line tools for seeding and status checks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every type
//! here mirrors a JSON shape served by the remote booking API, which is the
//! sole source of truth; ids are assigned remotely and treated as opaque
//! strings on this side.
//!
//! # Modules
//!
//! - [`types`] - Entities, creation payloads, and type-safe ID newtypes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
