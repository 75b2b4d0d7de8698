use std::rc::Rc;

use serde_json::{json, Value};
use tokio::sync::Mutex;
use tracing::{error, info, instrument, warn};

use super::api;
use super::errors::{ApiError, ApiResult};
use super::notify::{LoginRedirect, NotificationSink, WindowNavigator};
use super::session::SessionStore;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport, TransportError};
use super::types::*;
use crate::services::config::{ApiConfig, ACCESS_TOKENS_HEADER, REFRESH_PATH};

const SETUP_ERROR_MESSAGE: &str = "An error occurred while setting up the request.";
const NETWORK_ERROR_MESSAGE: &str = "Network error or server is down. Please try again later.";
const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";
const REFRESH_FAILED_MESSAGE: &str = "Could not renew your session. Please log in again.";
const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// A single outgoing request plus its retry bookkeeping.
///
/// The `retried` flag caps every original request at one refresh-retry
/// cycle, however the retried response itself turns out.
struct RequestContext {
    request: ApiRequest,
    retried: bool,
}

impl RequestContext {
    fn new(request: ApiRequest) -> Self {
        Self {
            request,
            retried: false,
        }
    }
}

/// What went wrong with a request, classified once per attempt.
enum FailureKind {
    /// No response object exists (network down, server unreachable)
    NetworkFailure { message: String },
    /// The server answered 401
    Unauthorized { body: ApiErrorBody },
    /// The server answered with any other non-2xx status
    OtherServerError { status: u16, body: ApiErrorBody },
}

/// Authenticated request client for the marketplace API.
///
/// Decorates outgoing requests with the stored access tokens, classifies
/// failures, and recovers from a 401 with a bounded refresh-then-retry
/// cycle. Unrecoverable session failures clear the credential store and
/// send the user back to the login page.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    pub(crate) session: SessionStore,
    notifier: Rc<dyn NotificationSink>,
    navigator: Rc<dyn LoginRedirect>,
    refresh_gate: Rc<Mutex<()>>,
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn HttpTransport>,
        session: SessionStore,
        notifier: Rc<dyn NotificationSink>,
        navigator: Rc<dyn LoginRedirect>,
    ) -> Self {
        Self {
            transport,
            session,
            notifier,
            navigator,
            refresh_gate: Rc::new(Mutex::new(())),
        }
    }

    /// Client wired to the browser: reqwest transport, localStorage-backed
    /// credentials, window-location redirect.
    pub fn browser(config: &ApiConfig, notifier: Rc<dyn NotificationSink>) -> Self {
        Self::new(
            Rc::new(ReqwestTransport::new(config)),
            SessionStore::browser(),
            notifier,
            Rc::new(WindowNavigator::new(&config.login_path)),
        )
    }

    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::get(path)).await
    }

    pub async fn post(&self, path: &str, body: Value) -> ApiResult<ApiResponse> {
        self.send(ApiRequest::post(path, body)).await
    }

    /// Send a request through the full decorate / classify / recover cycle.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut ctx = RequestContext::new(request);

        loop {
            self.decorate(&mut ctx)?;

            let outcome = self.transport.execute(&ctx.request).await;
            let failure = match Self::classify(outcome) {
                Ok(response) => return Ok(response),
                Err(failure) => failure,
            };

            match failure {
                FailureKind::NetworkFailure { message } => {
                    error!("No response received: {}", message);
                    self.notifier.notify(NETWORK_ERROR_MESSAGE);
                    return Err(ApiError::NetworkError { message });
                }
                FailureKind::Unauthorized { body } if !ctx.retried => {
                    self.reconcile_roles(&body);
                    ctx.retried = true;
                    self.refresh_access_token().await?;
                    // Loop around: the original request is re-decorated from
                    // the updated store and resent exactly once.
                }
                FailureKind::Unauthorized { body } => {
                    self.reconcile_roles(&body);
                    return Err(self.report_server_error(401, body));
                }
                FailureKind::OtherServerError { status, body } => {
                    self.reconcile_roles(&body);
                    return Err(self.report_server_error(status, body));
                }
            }
        }
    }

    /// Attach the stored access tokens to the dedicated header.
    ///
    /// An empty store sends the request undecorated; the server stays the
    /// authority on authorization.
    fn decorate(&self, ctx: &mut RequestContext) -> ApiResult<()> {
        let tokens = match self.session.access_tokens() {
            Ok(tokens) => tokens,
            Err(e) => {
                error!("Failed to read credential store: {}", e);
                self.notifier.notify(SETUP_ERROR_MESSAGE);
                return Err(e);
            }
        };

        if !tokens.is_empty() {
            let header = serde_json::to_string(&tokens)?;
            ctx.request.set_header(ACCESS_TOKENS_HEADER, &header);
        }

        Ok(())
    }

    /// Sort a completed attempt into success or one of the failure kinds.
    fn classify(
        outcome: Result<ApiResponse, TransportError>,
    ) -> Result<ApiResponse, FailureKind> {
        match outcome {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => {
                let body = serde_json::from_value::<ApiErrorBody>(response.body.clone())
                    .unwrap_or_default();
                if response.status == 401 {
                    Err(FailureKind::Unauthorized { body })
                } else {
                    Err(FailureKind::OtherServerError {
                        status: response.status,
                        body,
                    })
                }
            }
            Err(e) => Err(FailureKind::NetworkFailure { message: e.message }),
        }
    }

    /// Evict the stored token for the role the server rejected, if any.
    ///
    /// Best-effort: the original failure still decides the outcome.
    fn reconcile_roles(&self, body: &ApiErrorBody) {
        let Some(role) = &body.role else {
            return;
        };
        match self.session.remove_token_for_role(role) {
            Ok(true) => info!("Evicted rejected token for role: {}", role),
            Ok(false) => {}
            Err(e) => warn!("Role reconciliation skipped: {}", e),
        }
    }

    fn report_server_error(&self, status: u16, body: ApiErrorBody) -> ApiError {
        let message = body
            .error
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        self.notifier.notify(&message);
        ApiError::ServerError { status, message }
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// Runs one cycle at a time: concurrent 401 handlers queue on the gate
    /// and then retry against whatever tokens the first cycle persisted.
    async fn refresh_access_token(&self) -> ApiResult<()> {
        let _gate = self.refresh_gate.lock().await;

        let refresh_token = match self.session.refresh_token() {
            Ok(token) => token,
            Err(e) => {
                self.notifier.notify(SETUP_ERROR_MESSAGE);
                return Err(e);
            }
        };
        let Some(refresh_token) = refresh_token else {
            info!("No refresh token available, tearing down session");
            self.expire_session(SESSION_EXPIRED_MESSAGE);
            return Err(ApiError::SessionExpired);
        };

        // Dedicated, undecorated request to the refresh endpoint.
        let request = ApiRequest::post(REFRESH_PATH, json!({ "refreshTokens": refresh_token }));
        let outcome = self.transport.execute(&request).await;

        let issued = match outcome {
            Ok(response) if response.is_success() => {
                match response.json::<RefreshResponse>() {
                    Ok(RefreshResponse {
                        success: true,
                        access_token: Some(token),
                    }) => Some(token),
                    _ => None,
                }
            }
            _ => None,
        };

        match issued {
            Some(token) => {
                if let Err(e) = self.session.append_access_token(&token) {
                    self.notifier.notify(SETUP_ERROR_MESSAGE);
                    return Err(e);
                }
                info!("Access token refreshed");
                Ok(())
            }
            None => {
                error!("Token refresh rejected or unreachable");
                self.expire_session(REFRESH_FAILED_MESSAGE);
                Err(ApiError::RefreshFailed {
                    message: "Refresh endpoint rejected or unreachable".to_string(),
                })
            }
        }
    }

    /// Clear credentials, tell the user, and send them back to login.
    fn expire_session(&self, message: &str) {
        self.session.clear();
        self.notifier.notify(message);
        self.navigator.redirect_to_login();
    }

    // --- API surface -------------------------------------------------------

    #[instrument(skip(self, request), err)]
    pub async fn initiate_signup(&self, request: &SignupRequest) -> ApiResult<SignupResponse> {
        api::initiate_signup_impl(self, request).await
    }

    #[instrument(skip(self, request), err)]
    pub async fn verify_otp(&self, request: &OtpVerifyRequest) -> ApiResult<OtpVerifyResponse> {
        api::verify_otp_impl(self, request).await
    }

    /// Login and persist the issued token pair on success.
    #[instrument(skip(self, request), err)]
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        api::login_impl(self, request).await
    }

    #[instrument(skip(self), err)]
    pub async fn list_workers(&self) -> ApiResult<Vec<Worker>> {
        api::list_workers_impl(self).await
    }

    #[instrument(skip(self), err)]
    pub async fn worker_detail(&self, worker_id: &str) -> ApiResult<Worker> {
        api::worker_detail_impl(self, worker_id).await
    }

    #[instrument(skip(self), err)]
    pub async fn worker_services(&self, worker_id: &str) -> ApiResult<Vec<ServiceOffering>> {
        api::worker_services_impl(self, worker_id).await
    }

    #[instrument(skip(self, request), err)]
    pub async fn create_booking(&self, request: &BookingRequest) -> ApiResult<BookingResponse> {
        api::create_booking_impl(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    use async_trait::async_trait;

    use super::super::session::testing::{token_with_role, MemoryBackend};
    use super::super::session::{StorageBackend, ACCESS_TOKENS_KEY};
    use super::*;

    struct MockTransport {
        script: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        fn new(script: Vec<Result<ApiResponse, TransportError>>) -> Self {
            Self {
                script: RefCell::new(script.into()),
                requests: RefCell::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for MockTransport {
        async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
            self.requests.borrow_mut().push(request.clone());
            self.script
                .borrow_mut()
                .pop_front()
                .expect("transport script exhausted")
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        messages: RefCell<Vec<String>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: Cell<u32>,
    }

    impl LoginRedirect for RecordingNavigator {
        fn redirect_to_login(&self) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    struct Harness {
        client: ApiClient,
        transport: Rc<MockTransport>,
        sink: Rc<RecordingSink>,
        navigator: Rc<RecordingNavigator>,
        store: SessionStore,
    }

    fn harness(script: Vec<Result<ApiResponse, TransportError>>) -> Harness {
        let transport = Rc::new(MockTransport::new(script));
        let sink = Rc::new(RecordingSink::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let store = SessionStore::new(Rc::new(MemoryBackend::default()));
        let client = ApiClient::new(
            transport.clone(),
            store.clone(),
            sink.clone(),
            navigator.clone(),
        );
        Harness {
            client,
            transport,
            sink,
            navigator,
            store,
        }
    }

    fn response(status: u16, body: Value) -> Result<ApiResponse, TransportError> {
        Ok(ApiResponse { status, body })
    }

    fn no_response() -> Result<ApiResponse, TransportError> {
        Err(TransportError {
            message: "connection refused".to_string(),
        })
    }

    #[tokio::test]
    async fn test_success_passes_through_unchanged() {
        let h = harness(vec![response(200, json!({ "list": [] }))]);

        let result = h.client.get("/workers").await.unwrap();

        assert_eq!(result.status, 200);
        assert_eq!(h.transport.requests().len(), 1);
        assert!(h.sink.messages.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_empty_store_sends_undecorated() {
        let h = harness(vec![response(200, json!({}))]);

        h.client.get("/workers").await.unwrap();

        let sent = h.transport.requests();
        assert!(sent[0].header(ACCESS_TOKENS_HEADER).is_none());
    }

    #[tokio::test]
    async fn test_decoration_attaches_stored_tokens() {
        let h = harness(vec![response(200, json!({}))]);
        h.store.append_access_token("tokA").unwrap();

        h.client.get("/workers").await.unwrap();

        let sent = h.transport.requests();
        assert_eq!(sent[0].header(ACCESS_TOKENS_HEADER), Some(r#"["tokA"]"#));
    }

    #[tokio::test]
    async fn test_corrupt_store_aborts_with_configuration_error() {
        let backend = Rc::new(MemoryBackend::default());
        backend.set(ACCESS_TOKENS_KEY, "not json").unwrap();
        let transport = Rc::new(MockTransport::new(vec![]));
        let sink = Rc::new(RecordingSink::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let client = ApiClient::new(
            transport.clone(),
            SessionStore::new(backend),
            sink.clone(),
            navigator,
        );

        let result = client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::ConfigurationError { .. })));
        // Nothing went on the wire, but the user heard about it.
        assert!(transport.requests().is_empty());
        assert_eq!(sink.messages.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_refresh_and_retry_cycle() {
        // One token for role A, a 401 naming role A, a successful refresh,
        // a successful retry.
        let h = harness(vec![
            response(401, json!({ "error": "Token expired", "role": "A" })),
            response(200, json!({ "success": true, "accessToken": "tokA2" })),
            response(200, json!({ "list": [] })),
        ]);
        let tok_a = token_with_role("A");
        h.store.append_access_token(&tok_a).unwrap();
        h.store.set_refresh_token("r1").unwrap();

        let result = h.client.get("/workers").await.unwrap();
        assert_eq!(result.status, 200);

        // Rejected token evicted, refreshed token appended.
        assert_eq!(h.store.access_tokens().unwrap(), vec!["tokA2"]);
        assert_eq!(h.store.refresh_token().unwrap().as_deref(), Some("r1"));

        let sent = h.transport.requests();
        assert_eq!(sent.len(), 3);

        // The refresh call is dedicated and undecorated.
        assert_eq!(sent[1].path, REFRESH_PATH);
        assert!(sent[1].header(ACCESS_TOKENS_HEADER).is_none());
        assert_eq!(
            sent[1].body.as_ref().unwrap()["refreshTokens"],
            json!("r1")
        );

        // The retry carries the refreshed token.
        assert_eq!(
            sent[2].header(ACCESS_TOKENS_HEADER),
            Some(r#"["tokA2"]"#)
        );
        assert_eq!(h.navigator.redirects.get(), 0);
    }

    #[tokio::test]
    async fn test_at_most_one_refresh_cycle_per_request() {
        // The retried request 401s again; no second refresh happens.
        let h = harness(vec![
            response(401, json!({})),
            response(200, json!({ "success": true, "accessToken": "tok2" })),
            response(401, json!({ "error": "Denied" })),
        ]);
        h.store.append_access_token("tok1").unwrap();
        h.store.set_refresh_token("r1").unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(
            result,
            Err(ApiError::ServerError { status: 401, .. })
        ));
        // Exactly three wire calls: original, refresh, retry.
        assert_eq!(h.transport.requests().len(), 3);
        assert_eq!(h.sink.messages.borrow().as_slice(), ["Denied"]);
        assert_eq!(h.navigator.redirects.get(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_reports_without_refresh() {
        let h = harness(vec![no_response()]);
        h.store.append_access_token("tokA").unwrap();
        h.store.set_refresh_token("r1").unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::NetworkError { .. })));
        assert_eq!(h.transport.requests().len(), 1);
        assert_eq!(
            h.sink.messages.borrow().as_slice(),
            [NETWORK_ERROR_MESSAGE]
        );
        // Credentials untouched: no response means nothing to reconcile.
        assert_eq!(h.store.access_tokens().unwrap(), vec!["tokA"]);
    }

    #[tokio::test]
    async fn test_missing_refresh_token_tears_down_session() {
        let h = harness(vec![response(401, json!({}))]);
        h.store.append_access_token("tokA").unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::SessionExpired)));
        // The refresh endpoint is never touched.
        assert_eq!(h.transport.requests().len(), 1);
        assert!(h.store.access_tokens().unwrap().is_empty());
        assert!(h.store.refresh_token().unwrap().is_none());
        assert_eq!(h.navigator.redirects.get(), 1);
        assert_eq!(
            h.sink.messages.borrow().as_slice(),
            [SESSION_EXPIRED_MESSAGE]
        );
    }

    #[tokio::test]
    async fn test_rejected_refresh_tears_down_session() {
        let h = harness(vec![
            response(401, json!({})),
            response(200, json!({ "success": false })),
        ]);
        h.store.append_access_token("tokA").unwrap();
        h.store.set_refresh_token("r1").unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::RefreshFailed { .. })));
        assert!(h.store.access_tokens().unwrap().is_empty());
        assert!(h.store.refresh_token().unwrap().is_none());
        assert_eq!(h.navigator.redirects.get(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_refresh_endpoint_tears_down_session() {
        let h = harness(vec![response(401, json!({})), no_response()]);
        h.store.append_access_token("tokA").unwrap();
        h.store.set_refresh_token("r1").unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::RefreshFailed { .. })));
        assert_eq!(h.navigator.redirects.get(), 1);
    }

    #[tokio::test]
    async fn test_role_scoped_eviction_on_server_error() {
        let h = harness(vec![response(
            500,
            json!({ "error": "boom", "role": "A" }),
        )]);
        let tok_a = token_with_role("A");
        let tok_b = token_with_role("B");
        h.store.append_access_token(&tok_a).unwrap();
        h.store.append_access_token(&tok_b).unwrap();

        let result = h.client.get("/workers").await;

        assert!(matches!(
            result,
            Err(ApiError::ServerError { status: 500, .. })
        ));
        // Exactly the role-A token is gone; no refresh was attempted.
        assert_eq!(h.store.access_tokens().unwrap(), vec![tok_b]);
        assert_eq!(h.transport.requests().len(), 1);
        assert_eq!(h.sink.messages.borrow().as_slice(), ["boom"]);
    }

    #[tokio::test]
    async fn test_server_error_without_message_uses_generic() {
        let h = harness(vec![response(500, Value::Null)]);

        let result = h.client.get("/workers").await;

        assert!(matches!(result, Err(ApiError::ServerError { .. })));
        assert_eq!(
            h.sink.messages.borrow().as_slice(),
            [GENERIC_ERROR_MESSAGE]
        );
    }

    #[tokio::test]
    async fn test_refresh_appends_rather_than_replaces() {
        // 401 names role A but only a role-B token is stored: nothing is
        // evicted, and the refreshed token joins the existing one.
        let h = harness(vec![
            response(401, json!({ "role": "A" })),
            response(200, json!({ "success": true, "accessToken": "tokA2" })),
            response(200, json!({})),
        ]);
        let tok_b = token_with_role("B");
        h.store.append_access_token(&tok_b).unwrap();
        h.store.set_refresh_token("r1").unwrap();

        h.client.get("/workers").await.unwrap();

        assert_eq!(
            h.store.access_tokens().unwrap(),
            vec![tok_b, "tokA2".to_string()]
        );
    }
}
