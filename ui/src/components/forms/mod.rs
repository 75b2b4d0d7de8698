pub mod login_form;
pub mod otp_form;
pub mod signup_form;

pub use login_form::*;
pub use otp_form::*;
pub use signup_form::*;
