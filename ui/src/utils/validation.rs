use crate::marketplace::{AppState, FieldValidation};

const PASSWORD_SPECIALS: &str = "@$!%*?&";

impl AppState {
    pub fn validate_name(&self) -> FieldValidation {
        let name = self.signup.name.trim();
        if name.is_empty() {
            return FieldValidation::None;
        }

        if !name.chars().any(|c| c.is_ascii_alphabetic()) {
            return FieldValidation::Invalid(
                "Name must contain at least one alphabetic character",
            );
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return FieldValidation::Invalid("Name can only contain letters and spaces");
        }

        FieldValidation::Valid
    }

    pub fn validate_email(&self) -> FieldValidation {
        let email = self.signup.email.trim();
        if email.is_empty() {
            return FieldValidation::None;
        }

        if email.chars().any(char::is_whitespace) {
            return FieldValidation::Invalid("Email must not contain spaces");
        }

        // Basic email validation: exactly one @, non-empty local part, and a
        // dotted domain
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return FieldValidation::Invalid("Invalid email address");
        }

        let local_part = parts[0];
        let domain_part = parts[1];

        if !local_part.is_empty() && domain_part.contains('.') && domain_part.len() > 2 {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid("Invalid email address")
        }
    }

    pub fn validate_password(&self) -> FieldValidation {
        let pass = &self.signup.pass;
        if pass.is_empty() {
            return FieldValidation::None;
        }

        if pass.chars().any(char::is_whitespace) {
            return FieldValidation::Invalid("Password must not contain spaces");
        }
        if pass.len() < 8 {
            return FieldValidation::Invalid("Password must be at least 8 characters");
        }
        if !pass.chars().any(|c| c.is_ascii_uppercase()) {
            return FieldValidation::Invalid(
                "Password must contain at least one uppercase letter",
            );
        }
        if !pass.chars().any(|c| c.is_ascii_lowercase()) {
            return FieldValidation::Invalid(
                "Password must contain at least one lowercase letter",
            );
        }
        if !pass.chars().any(|c| c.is_ascii_digit()) {
            return FieldValidation::Invalid("Password must contain at least one number");
        }
        if !pass.chars().any(|c| PASSWORD_SPECIALS.contains(c)) {
            return FieldValidation::Invalid(
                "Password must contain at least one special character",
            );
        }

        FieldValidation::Valid
    }

    pub fn validate_password_confirm(&self) -> FieldValidation {
        if self.signup.pass.is_empty() && self.signup.pass_confirm.is_empty() {
            return FieldValidation::None;
        }

        if self.signup.pass == self.signup.pass_confirm {
            FieldValidation::Valid
        } else {
            FieldValidation::Invalid("Passwords must match")
        }
    }
}

pub fn validation_class(validation: &FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "input-field input-valid",
        FieldValidation::Invalid(_) => "input-field input-invalid",
        FieldValidation::None => "input-field",
    }
}

pub fn validation_style(validation: &FieldValidation) -> &'static str {
    match validation {
        FieldValidation::Valid => "border: 2px solid #10b981; background-color: #f0fdf4;",
        FieldValidation::Invalid(_) => "border: 2px solid #ef4444; background-color: #fef2f2;",
        FieldValidation::None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_signup(
        name: &str,
        email: &str,
        pass: &str,
        pass_confirm: &str,
    ) -> AppState {
        let mut state = AppState::default();
        state.signup.name = name.to_string();
        state.signup.email = email.to_string();
        state.signup.pass = pass.to_string();
        state.signup.pass_confirm = pass_confirm.to_string();
        state
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(
            state_with_signup("", "", "", "").validate_name(),
            FieldValidation::None
        );
        assert!(state_with_signup("Asha Nair", "", "", "")
            .validate_name()
            .is_valid());
        assert!(!state_with_signup("1234", "", "", "").validate_name().is_valid());
        assert!(!state_with_signup("Asha_2", "", "", "")
            .validate_name()
            .is_valid());
    }

    #[test]
    fn test_email_rules() {
        assert!(state_with_signup("", "asha@example.com", "", "")
            .validate_email()
            .is_valid());
        assert!(!state_with_signup("", "asha@example", "", "")
            .validate_email()
            .is_valid());
        assert!(!state_with_signup("", "asha example@x.com", "", "")
            .validate_email()
            .is_valid());
        assert!(!state_with_signup("", "@example.com", "", "")
            .validate_email()
            .is_valid());
    }

    #[test]
    fn test_password_rules() {
        let valid = "Str0ng!pass";
        assert!(state_with_signup("", "", valid, "")
            .validate_password()
            .is_valid());

        for bad in ["short1!", "alllower1!", "ALLUPPER1!", "NoDigits!!", "NoSpecial11a", "has space1!A"] {
            assert!(
                !state_with_signup("", "", bad, "").validate_password().is_valid(),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_password_confirm_rules() {
        assert_eq!(
            state_with_signup("", "", "", "").validate_password_confirm(),
            FieldValidation::None
        );
        assert!(state_with_signup("", "", "Str0ng!pass", "Str0ng!pass")
            .validate_password_confirm()
            .is_valid());
        assert!(!state_with_signup("", "", "Str0ng!pass", "different")
            .validate_password_confirm()
            .is_valid());
    }
}
