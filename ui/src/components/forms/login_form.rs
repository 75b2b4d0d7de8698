use dioxus::prelude::*;

use crate::components::input::{InputType, ValidatedInput};
use crate::marketplace::{validate_login_complete, AppAction, AppState};
use crate::services::client::{ApiClient, LoginRequest, LoginResponse};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
    /// Called after a successful login, once the token pair is stored.
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_complete = props.on_complete;
    let client = use_context::<ApiClient>();

    rsx! {
        div {
            class: "auth-form login-form",

            h1 {
                class: "form-title",
                "Sign In"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    value: state().login.email,
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: state().login.is_authenticating,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetLoginEmail(data));
                    }
                }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Password:"
                }
                ValidatedInput {
                    value: state().login.pass,
                    placeholder: "Password".to_string(),
                    input_type: InputType::Password,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: state().login.is_authenticating,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetLoginPass(data));
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().login.is_authenticating || !validate_login_complete(&state()),
                    onclick: move |_| {
                        let current_state = state();
                        let request = LoginRequest {
                            email: current_state.login.email.trim().to_string(),
                            pass: current_state.login.pass.clone(),
                        };

                        dispatch.call(AppAction::SetAuthenticating(true));
                        dispatch.call(AppAction::SetLoginResponse(None));

                        let client = client.clone();
                        spawn(async move {
                            match client.login(&request).await {
                                Ok(response) => {
                                    let succeeded = response.success;
                                    dispatch.call(AppAction::SetLoginResponse(Some(response)));
                                    if succeeded {
                                        on_complete.call(());
                                    }
                                }
                                Err(e) => {
                                    dispatch.call(AppAction::SetLoginResponse(Some(LoginResponse {
                                        success: false,
                                        message: Some(format!("Error: {}", e)),
                                        access_token: None,
                                        refresh_token: None,
                                    })));
                                }
                            }
                            dispatch.call(AppAction::SetAuthenticating(false));
                        });
                    },
                    if state().login.is_authenticating {
                        "Authenticating..."
                    } else {
                        "Login"
                    }
                }
            }

            if let Some(result) = &state().login.response {
                if !result.success {
                    div {
                        class: "form-result error",
                        if let Some(message) = &result.message {
                            "✗ {message}"
                        }
                    }
                }
            }
        }
    }
}
