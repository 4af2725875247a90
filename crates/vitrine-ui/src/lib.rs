//! `Vitrine` UI - Leptos-based user interface.
//!
//! This crate provides the frontend screens for the `Vitrine` page sequence:
//! splash, hub and message carousel.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod storage;
pub mod theme;

pub use app::{App, Screen};
