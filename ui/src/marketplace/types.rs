// Core types for the marketplace app - no dioxus imports needed here
use std::collections::VecDeque;

use crate::services::client::{
    BookingResponse, LoginResponse, OtpVerifyResponse, ServiceOffering, SignupResponse, Worker,
};
use crate::utils::geo::GeoPoint;

/// Most recent notifications kept for the popup display
const MAX_NOTIFICATIONS: usize = 5;

/// Validation outcome for a single form field
#[derive(Clone, PartialEq, Debug)]
pub enum FieldValidation {
    None,
    Valid,
    Invalid(&'static str),
}

impl FieldValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldValidation::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldValidation::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

// Form state structs
#[derive(Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub pass: String,
    pub pass_confirm: String,
    pub show_errors: bool,
    pub is_submitting: bool,
    pub response: Option<SignupResponse>,
}

#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub pass: String,
    pub is_authenticating: bool,
    pub response: Option<LoginResponse>,
}

#[derive(Clone, Default)]
pub struct OtpForm {
    pub email: String,
    pub otp: String,
    pub is_verifying: bool,
    pub response: Option<OtpVerifyResponse>,
}

/// Worker discovery state for the home page
#[derive(Clone, Default)]
pub struct DiscoveryState {
    pub location: Option<GeoPoint>,
    pub workers: Vec<Worker>,
    pub is_loading: bool,
}

/// Worker profile page state, including the booking form
#[derive(Clone, Default)]
pub struct WorkerDetailState {
    pub worker: Option<Worker>,
    pub services: Vec<ServiceOffering>,
    pub is_loading: bool,
    pub selected_service: Option<String>,
    pub booking_date: String,
    pub booking_slot: String,
    pub is_booking: bool,
    pub booking_response: Option<BookingResponse>,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum AppAction {
    // Signup form actions
    SetSignupName(String),
    SetSignupEmail(String),
    SetSignupPass(String),
    SetSignupPassConfirm(String),
    ShowSignupErrors(bool),
    SetSignupSubmitting(bool),
    SetSignupResponse(Option<SignupResponse>),

    // Login form actions
    SetLoginEmail(String),
    SetLoginPass(String),
    SetAuthenticating(bool),
    SetLoginResponse(Option<LoginResponse>),

    // OTP form actions
    SetOtpEmail(String),
    SetOtpCode(String),
    SetOtpVerifying(bool),
    SetOtpResponse(Option<OtpVerifyResponse>),

    // Discovery actions
    SetLocation(Option<GeoPoint>),
    SetWorkers(Vec<Worker>),
    SetDiscoveryLoading(bool),

    // Worker detail actions
    SetWorkerDetail(Option<Worker>),
    SetWorkerServices(Vec<ServiceOffering>),
    SetDetailLoading(bool),
    SelectService(String),
    SetBookingDate(String),
    SetBookingSlot(String),
    SetBooking(bool),
    SetBookingResponse(Option<BookingResponse>),

    // Notification popup actions
    PushNotification(String),
    DismissNotification,
}

#[derive(Clone, Default)]
pub struct AppState {
    pub signup: SignupForm,
    pub login: LoginForm,
    pub otp: OtpForm,
    pub discovery: DiscoveryState,
    pub worker_detail: WorkerDetailState,
    pub notifications: VecDeque<String>,
}

impl AppState {
    /// Reduces the state in place based on an action
    pub fn reduce_in_place(&mut self, action: AppAction) {
        match action {
            // Signup form actions
            AppAction::SetSignupName(name) => {
                self.signup.name = name;
            }
            AppAction::SetSignupEmail(email) => {
                self.signup.email = email;
            }
            AppAction::SetSignupPass(pass) => {
                self.signup.pass = pass;
            }
            AppAction::SetSignupPassConfirm(pass) => {
                self.signup.pass_confirm = pass;
            }
            AppAction::ShowSignupErrors(show) => {
                self.signup.show_errors = show;
            }
            AppAction::SetSignupSubmitting(submitting) => {
                self.signup.is_submitting = submitting;
            }
            AppAction::SetSignupResponse(response) => {
                self.signup.response = response;
            }

            // Login form actions
            AppAction::SetLoginEmail(email) => {
                self.login.email = email;
            }
            AppAction::SetLoginPass(pass) => {
                self.login.pass = pass;
            }
            AppAction::SetAuthenticating(authenticating) => {
                self.login.is_authenticating = authenticating;
            }
            AppAction::SetLoginResponse(response) => {
                self.login.response = response;
            }

            // OTP form actions
            AppAction::SetOtpEmail(email) => {
                self.otp.email = email;
            }
            AppAction::SetOtpCode(otp) => {
                self.otp.otp = otp;
            }
            AppAction::SetOtpVerifying(verifying) => {
                self.otp.is_verifying = verifying;
            }
            AppAction::SetOtpResponse(response) => {
                self.otp.response = response;
            }

            // Discovery actions
            AppAction::SetLocation(location) => {
                self.discovery.location = location;
            }
            AppAction::SetWorkers(workers) => {
                self.discovery.workers = workers;
            }
            AppAction::SetDiscoveryLoading(loading) => {
                self.discovery.is_loading = loading;
            }

            // Worker detail actions
            AppAction::SetWorkerDetail(worker) => {
                self.worker_detail.worker = worker;
            }
            AppAction::SetWorkerServices(services) => {
                self.worker_detail.services = services;
            }
            AppAction::SetDetailLoading(loading) => {
                self.worker_detail.is_loading = loading;
            }
            AppAction::SelectService(service_id) => {
                self.worker_detail.selected_service = Some(service_id);
            }
            AppAction::SetBookingDate(date) => {
                self.worker_detail.booking_date = date;
            }
            AppAction::SetBookingSlot(slot) => {
                self.worker_detail.booking_slot = slot;
            }
            AppAction::SetBooking(booking) => {
                self.worker_detail.is_booking = booking;
            }
            AppAction::SetBookingResponse(response) => {
                self.worker_detail.booking_response = response;
            }

            // Notification popup actions
            AppAction::PushNotification(message) => {
                self.notifications.push_back(message);
                while self.notifications.len() > MAX_NOTIFICATIONS {
                    self.notifications.pop_front();
                }
            }
            AppAction::DismissNotification => {
                self.notifications.pop_front();
            }
        }
    }
}
