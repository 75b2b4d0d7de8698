use dioxus::prelude::*;

use crate::components::input::{InputType, ValidatedInput};
use crate::marketplace::{AppAction, AppState};
use crate::services::client::{ApiClient, OtpVerifyRequest, OtpVerifyResponse};

#[derive(Props, PartialEq, Clone)]
pub struct OtpFormComponentProps {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
    /// Called after the code checks out; the page moves on to login.
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn OtpFormComponent(props: OtpFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_complete = props.on_complete;
    let client = use_context::<ApiClient>();

    rsx! {
        div {
            class: "auth-form otp-form",

            h1 {
                class: "form-title",
                "Verify Your Email"
            }

            p {
                class: "form-hint",
                "Enter the one-time code sent to {state().otp.email}"
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().otp.otp,
                    placeholder: "One-time code".to_string(),
                    input_type: InputType::Text,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: state().otp.is_verifying,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetOtpCode(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().otp.is_verifying || state().otp.otp.trim().is_empty(),
                    onclick: move |_| {
                        let current_state = state();
                        let request = OtpVerifyRequest {
                            email: current_state.otp.email.clone(),
                            otp: current_state.otp.otp.trim().to_string(),
                        };

                        dispatch.call(AppAction::SetOtpVerifying(true));
                        dispatch.call(AppAction::SetOtpResponse(None));

                        let client = client.clone();
                        spawn(async move {
                            match client.verify_otp(&request).await {
                                Ok(response) => {
                                    let verified = response.success;
                                    dispatch.call(AppAction::SetOtpResponse(Some(response)));
                                    if verified {
                                        on_complete.call(());
                                    }
                                }
                                Err(e) => {
                                    dispatch.call(AppAction::SetOtpResponse(Some(OtpVerifyResponse {
                                        success: false,
                                        message: Some(format!("Error: {}", e)),
                                    })));
                                }
                            }
                            dispatch.call(AppAction::SetOtpVerifying(false));
                        });
                    },
                    if state().otp.is_verifying {
                        "Verifying..."
                    } else {
                        "Verify"
                    }
                }
            }

            if let Some(result) = &state().otp.response {
                div {
                    class: if result.success { "form-result success" } else { "form-result error" },
                    if let Some(message) = &result.message {
                        if result.success { "✓ {message}" } else { "✗ {message}" }
                    }
                }
            }
        }
    }
}
