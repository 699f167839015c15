//! ashyus-ui - Stores and view components for the Ashyus Books site
//!
//! Views are pure: they render store state and report user actions through
//! callbacks. Data loading and persistence live in the web crate.

pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
