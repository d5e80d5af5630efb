//! Common test imports and utilities for layout tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// External crate declaration for no_std compatibility
extern crate alloc;

// Re-export commonly used alloc types for tests
pub use alloc::{format, string::String, string::ToString, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Formats are referenced by nearly every test
pub use crate::format::FormatId;
