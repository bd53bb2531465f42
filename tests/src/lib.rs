//! End-to-end tests for the AdamFTD search surface

pub mod common;
