//! Infrastructure Services
//!
//! This module provides the core infrastructure services for the
//! marketplace application:
//!
//! - **client**: authenticated API client with session management and
//!   bounded refresh-retry recovery
//! - **config**: fixed client configuration (origin, timeout, login path)
//!
//! The services are designed to be WASM-first, using browser APIs and async
//! traits without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
