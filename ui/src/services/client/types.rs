use serde::{Deserialize, Serialize};

/// Error payload the API attaches to non-2xx responses.
///
/// `role` names the authenticated role the server rejected the request for,
/// which drives role-scoped token eviction on the client.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ApiErrorBody {
    pub error: Option<String>,
    pub role: Option<String>,
}

/// Signup initiation request
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub pass: String,
}

/// Signup initiation response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// OTP verification request
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OtpVerifyRequest {
    pub email: String,
    pub otp: String,
}

/// OTP verification response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OtpVerifyResponse {
    pub success: bool,
    pub message: Option<String>,
}

/// Login request
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub pass: String,
}

/// Login response carrying the issued token pair on success
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoginResponse {
    pub success: bool,
    pub message: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Refresh endpoint response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshResponse {
    pub success: bool,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
}

/// A worker profile as listed by the discovery endpoint
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Worker {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub service: String,
    pub lat: f64,
    pub long: f64,
    pub active: bool,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Worker discovery response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorkerListResponse {
    pub list: Vec<Worker>,
}

/// A single service a worker offers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceOffering {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// Worker services response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceListResponse {
    pub list: Vec<ServiceOffering>,
}

/// Booking creation request
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookingRequest {
    #[serde(rename = "workerId")]
    pub worker_id: String,
    #[serde(rename = "serviceId")]
    pub service_id: String,
    pub date: String,
    pub slot: String,
}

/// Booking creation response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BookingResponse {
    pub success: bool,
    pub message: Option<String>,
}
