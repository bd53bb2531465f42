//! Navigation dispatch for the AdamFTD search surface
//!
//! This crate maps user intent to navigation targets:
//! - [`DispatchRouter`] turns a selected suggestion or a raw query into a target
//! - [`ActionCatalog`] holds the role-scoped quick actions shown under the search box

#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

mod catalog;
mod router;

pub use catalog::{Accent, ActionCatalog, ActionDescriptor, ActionIcon, ActionStyle};
pub use router::DispatchRouter;
