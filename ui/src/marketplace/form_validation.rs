use crate::marketplace::types::AppState;

/// Validates that all signup fields are filled and pass their rules
pub fn validate_signup_complete(state: &AppState) -> bool {
    !state.signup.name.trim().is_empty()
        && !state.signup.email.trim().is_empty()
        && !state.signup.pass.is_empty()
        && state.validate_name().is_valid()
        && state.validate_email().is_valid()
        && state.validate_password().is_valid()
        && state.validate_password_confirm().is_valid()
}

/// Validates that the login form can be submitted
pub fn validate_login_complete(state: &AppState) -> bool {
    !state.login.email.trim().is_empty() && !state.login.pass.is_empty()
}

/// Validates that a booking can be submitted from the worker detail page
pub fn validate_booking_ready(state: &AppState) -> bool {
    state.worker_detail.worker.is_some()
        && state.worker_detail.selected_service.is_some()
        && !state.worker_detail.booking_date.trim().is_empty()
        && !state.worker_detail.booking_slot.trim().is_empty()
}

/// Gets a user-friendly validation message for the signup form
pub fn get_signup_validation_message(state: &AppState) -> Option<&'static str> {
    if state.signup.name.trim().is_empty() {
        return Some("Name is required");
    }
    if let Some(message) = state.validate_name().message() {
        return Some(message);
    }

    if state.signup.email.trim().is_empty() {
        return Some("Email is required");
    }
    if let Some(message) = state.validate_email().message() {
        return Some(message);
    }

    if state.signup.pass.is_empty() {
        return Some("Password is required");
    }
    if let Some(message) = state.validate_password().message() {
        return Some(message);
    }

    if state.signup.pass_confirm.is_empty() {
        return Some("Confirm Password is required");
    }
    state.validate_password_confirm().message()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_signup() -> AppState {
        let mut state = AppState::default();
        state.signup.name = "Asha Nair".to_string();
        state.signup.email = "asha@example.com".to_string();
        state.signup.pass = "Str0ng!pass".to_string();
        state.signup.pass_confirm = "Str0ng!pass".to_string();
        state
    }

    #[test]
    fn test_complete_signup_validates() {
        let state = complete_signup();
        assert!(validate_signup_complete(&state));
        assert_eq!(get_signup_validation_message(&state), None);
    }

    #[test]
    fn test_message_points_at_first_failing_field() {
        let mut state = complete_signup();
        state.signup.name = String::new();
        assert_eq!(
            get_signup_validation_message(&state),
            Some("Name is required")
        );

        let mut state = complete_signup();
        state.signup.pass_confirm = "other".to_string();
        assert_eq!(
            get_signup_validation_message(&state),
            Some("Passwords must match")
        );
        assert!(!validate_signup_complete(&state));
    }

    #[test]
    fn test_booking_requires_service_and_slot() {
        let mut state = AppState::default();
        assert!(!validate_booking_ready(&state));

        state.worker_detail.worker = Some(crate::services::client::Worker {
            id: "w1".to_string(),
            name: "worker".to_string(),
            service: "plumbing".to_string(),
            lat: 0.0,
            long: 0.0,
            active: true,
            image: None,
            description: None,
        });
        state.worker_detail.selected_service = Some("s1".to_string());
        state.worker_detail.booking_date = "2026-08-10".to_string();
        state.worker_detail.booking_slot = "10:00".to_string();
        assert!(validate_booking_ready(&state));
    }
}
