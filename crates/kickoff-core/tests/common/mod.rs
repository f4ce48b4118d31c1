//! Common test infrastructure for kickoff-core tests
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `fixtures`: Starter template repository and parameter builders
//! - `mock_server`: Wiremock setup helpers for the SPDX registry

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_server;

pub use fixtures::*;
pub use mock_server::*;
