//! Marquee Dashboard library.
//!
//! This crate provides the dashboard functionality as a library,
//! allowing it to be tested and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cache;
pub mod config;
pub mod routes;
pub mod seed;
pub mod state;
pub mod view;
