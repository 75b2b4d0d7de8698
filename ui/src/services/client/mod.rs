// Client-side functionality for the marketplace API
//
// This module provides a complete browser-side implementation for:
// - Authenticated requests with token decoration
// - Bounded refresh-then-retry recovery on authorization failure
// - Session management over browser-persisted storage
// - User, worker, and booking endpoint wrappers

pub mod api;
pub mod api_client;
pub mod errors;
pub mod notify;
pub mod session;
pub mod transport;
pub mod types;

// Re-export core types for easy access
pub use types::{
    ApiErrorBody,
    SignupRequest,
    SignupResponse,
    OtpVerifyRequest,
    OtpVerifyResponse,
    LoginRequest,
    LoginResponse,
    RefreshResponse,
    // Discovery types
    Worker,
    WorkerListResponse,
    ServiceOffering,
    ServiceListResponse,
    // Booking types
    BookingRequest,
    BookingResponse,
};

// Re-export error types
pub use errors::{ApiError, ApiResult};

// Re-export the client and its seams
pub use api_client::ApiClient;
pub use notify::{LoginRedirect, NotificationSink, WindowNavigator};
pub use session::{JwtUtils, SessionStore, StorageBackend};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, ReqwestTransport};
