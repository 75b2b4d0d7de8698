//! User Interface Components
//!
//! This module contains reusable Dioxus components for the marketplace UI:
//!
//! - **forms**: signup, login, and OTP verification forms
//! - **display**: worker cards, error popup, and loading indicator
//! - **input**: validated input fields and validation feedback
//!
//! All components are designed to work within the Dioxus framework and
//! support both server-side and WASM deployment targets.

pub mod display;
pub mod forms;
pub mod input;
