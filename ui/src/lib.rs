//! This crate contains all shared UI components for the marketplace client.

pub mod app;
pub use app::{AppShell, NearbyWorkersSection, WorkerProfileSection};

pub mod components;
pub mod marketplace;
pub mod services;
pub mod utils;
