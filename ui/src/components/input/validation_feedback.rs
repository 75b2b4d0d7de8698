use dioxus::prelude::*;

use crate::marketplace::FieldValidation;

#[derive(Props, PartialEq, Clone)]
pub struct FieldValidationFeedbackProps {
    pub validation: FieldValidation,
    /// Only show failures once the user has tried to submit
    pub show_errors: bool,
}

#[component]
pub fn FieldValidationFeedback(props: FieldValidationFeedbackProps) -> Element {
    match props.validation {
        FieldValidation::Invalid(message) if props.show_errors => rsx! {
            div {
                class: "validation-feedback invalid",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ {message}"
            }
        },
        _ => rsx! { div {} },
    }
}
