//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the
//! application:
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **geo**: great-circle distance and the service-radius predicate
//! - **validation**: form validation helpers and CSS class mapping
//!
//! These utilities are designed to work consistently across server-side and
//! WASM deployment targets.

pub mod console_macros;
pub mod geo;
pub mod validation;

pub use geo::*;
pub use validation::*;
