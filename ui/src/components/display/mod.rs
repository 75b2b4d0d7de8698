pub mod error_popup;
pub mod loading_indicator;
pub mod worker_card;

pub use error_popup::*;
pub use loading_indicator::*;
pub use worker_card::*;
