//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing. The web
//! crate owns the stores and feeds them; views only read.

pub mod admin;
pub mod catalog;
pub mod site;

pub use admin::*;
pub use catalog::*;
pub use site::*;
