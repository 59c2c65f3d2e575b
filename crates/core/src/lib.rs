//! Tavola Core - domain types and the cart engine.
//!
//! This crate provides everything the Tavola demo knows about a
//! restaurant order:
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices
//! - [`menu`] - Menu items, categories, and nutrition data
//! - [`catalog`] - The read-only collection of orderable items
//! - [`cart`] - The cart engine: line bookkeeping and derived totals
//!
//! # Architecture
//!
//! The core crate contains only types and logic - no I/O, no HTTP, no
//! async. The web crate (`tavola-menu`) owns a single [`cart::Cart`]
//! per process and funnels every mutation through its API.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod menu;
pub mod types;

pub use cart::{Cart, CartLine, OrderConfirmation};
pub use catalog::Catalog;
pub use menu::{Category, MenuItem, NutritionInfo, UnknownCategory};
pub use types::*;
