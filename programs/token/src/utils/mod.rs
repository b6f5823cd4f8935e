//! Utility Modules
//!
//! Helpers used across all processors.
//!
//! # Modules
//!
//! - `assertions`: Precondition checks and checked arithmetic
//! - `authority`: Capability checks against stored authorities
//! - `locks`: Per-record lock table

pub mod assertions;
pub mod authority;
pub mod locks;

// Re-export the check helpers for easy access
pub use assertions::*;
pub use authority::*;
