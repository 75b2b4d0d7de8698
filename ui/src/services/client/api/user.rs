use serde_json::json;
use tracing::{info, instrument};

use crate::services::client::errors::ApiResult;
use crate::services::client::types::*;
use crate::services::client::ApiClient;

/// Start the signup flow; the server mails an OTP on success.
#[instrument(skip(client, request), err)]
pub async fn initiate_signup_impl(
    client: &ApiClient,
    request: &SignupRequest,
) -> ApiResult<SignupResponse> {
    let response = client
        .post(
            "/users/initiateSignup",
            json!({
                "name": request.name,
                "email": request.email,
                "pass": request.pass,
            }),
        )
        .await?;

    response.json()
}

#[instrument(skip(client, request), err)]
pub async fn verify_otp_impl(
    client: &ApiClient,
    request: &OtpVerifyRequest,
) -> ApiResult<OtpVerifyResponse> {
    let response = client
        .post(
            "/users/verifyOtp",
            json!({
                "email": request.email,
                "otp": request.otp,
            }),
        )
        .await?;

    response.json()
}

/// Login and persist the issued token pair through the session store.
#[instrument(skip(client, request), err)]
pub async fn login_impl(client: &ApiClient, request: &LoginRequest) -> ApiResult<LoginResponse> {
    let response = client
        .post(
            "/users/login",
            json!({
                "email": request.email,
                "pass": request.pass,
            }),
        )
        .await?;

    let login: LoginResponse = response.json()?;

    if login.success {
        if let (Some(access_token), Some(refresh_token)) =
            (&login.access_token, &login.refresh_token)
        {
            client.session.store_login(access_token, refresh_token)?;
            info!("Login succeeded for: {}", request.email);
        }
    }

    Ok(login)
}
