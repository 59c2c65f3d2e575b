//! Tavola Menu library.
//!
//! This crate provides the web application as a library, allowing the
//! router to be driven in-process by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
