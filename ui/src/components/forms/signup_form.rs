use dioxus::prelude::*;

use crate::components::input::{FieldValidationFeedback, InputType, ValidatedInput};
use crate::marketplace::{validate_signup_complete, AppAction, AppState};
use crate::services::client::{ApiClient, SignupRequest, SignupResponse};
use crate::utils::validation::validation_class;

#[derive(Props, PartialEq, Clone)]
pub struct SignupFormComponentProps {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
    /// Called once the server accepts the signup; the page navigates to OTP
    /// verification from here.
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn SignupFormComponent(props: SignupFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_complete = props.on_complete;
    let client = use_context::<ApiClient>();

    let show_errors = state().signup.show_errors;

    rsx! {
        div {
            class: "auth-form signup-form",

            h1 {
                class: "form-title",
                "Create An Account"
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().signup.name,
                    placeholder: "Name".to_string(),
                    input_type: InputType::Text,
                    input_class: validation_class(&state().validate_name()).to_string(),
                    input_style: "".to_string(),
                    disabled: state().signup.is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetSignupName(data));
                    }
                }
                FieldValidationFeedback {
                    validation: state().validate_name(),
                    show_errors: show_errors
                }
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().signup.email,
                    placeholder: "Email".to_string(),
                    input_type: InputType::Email,
                    input_class: validation_class(&state().validate_email()).to_string(),
                    input_style: "".to_string(),
                    disabled: state().signup.is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetSignupEmail(data));
                    }
                }
                FieldValidationFeedback {
                    validation: state().validate_email(),
                    show_errors: show_errors
                }
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().signup.pass,
                    placeholder: "Password".to_string(),
                    input_type: InputType::Password,
                    input_class: validation_class(&state().validate_password()).to_string(),
                    input_style: "".to_string(),
                    disabled: state().signup.is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetSignupPass(data));
                    }
                }
                FieldValidationFeedback {
                    validation: state().validate_password(),
                    show_errors: show_errors
                }
            }

            div {
                class: "input-section",
                ValidatedInput {
                    value: state().signup.pass_confirm,
                    placeholder: "Confirm Password".to_string(),
                    input_type: InputType::Password,
                    input_class: validation_class(&state().validate_password_confirm()).to_string(),
                    input_style: "".to_string(),
                    disabled: state().signup.is_submitting,
                    on_change: move |data: String| {
                        dispatch.call(AppAction::SetSignupPassConfirm(data));
                    }
                }
                FieldValidationFeedback {
                    validation: state().validate_password_confirm(),
                    show_errors: show_errors
                }
            }

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().signup.is_submitting,
                    onclick: move |_| {
                        dispatch.call(AppAction::ShowSignupErrors(true));
                        let current_state = state();
                        if !validate_signup_complete(&current_state) {
                            return;
                        }

                        let request = SignupRequest {
                            name: current_state.signup.name.trim().to_string(),
                            email: current_state.signup.email.trim().to_string(),
                            pass: current_state.signup.pass.clone(),
                        };

                        dispatch.call(AppAction::SetSignupSubmitting(true));
                        dispatch.call(AppAction::SetSignupResponse(None));

                        let client = client.clone();
                        spawn(async move {
                            match client.initiate_signup(&request).await {
                                Ok(response) => {
                                    let accepted = response.success;
                                    if accepted {
                                        // OTP verification continues with this address
                                        dispatch.call(AppAction::SetOtpEmail(request.email.clone()));
                                    }
                                    dispatch.call(AppAction::SetSignupResponse(Some(response)));
                                    if accepted {
                                        on_complete.call(());
                                    }
                                }
                                Err(e) => {
                                    dispatch.call(AppAction::SetSignupResponse(Some(SignupResponse {
                                        success: false,
                                        message: Some(format!("Error: {}", e)),
                                    })));
                                }
                            }
                            dispatch.call(AppAction::SetSignupSubmitting(false));
                        });
                    },
                    if state().signup.is_submitting {
                        "Signing up..."
                    } else {
                        "Sign Up"
                    }
                }
            }

            if let Some(result) = &state().signup.response {
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
