//! Resource endpoint implementations.
//!
//! Thin wrappers over the request client's send path; every call here is
//! decorated and refresh-protected by `ApiClient`.

mod booking;
mod user;
mod worker;

pub use booking::create_booking_impl;
pub use user::{initiate_signup_impl, login_impl, verify_otp_impl};
pub use worker::{list_workers_impl, worker_detail_impl, worker_services_impl};
