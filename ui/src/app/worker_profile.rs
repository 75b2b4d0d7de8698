use dioxus::prelude::*;

use crate::components::display::LoadingIndicator;
use crate::components::input::{InputType, ValidatedInput};
use crate::marketplace::{validate_booking_ready, AppAction, AppState};
use crate::services::client::{ApiClient, BookingRequest, BookingResponse};

#[derive(Props, PartialEq, Clone)]
pub struct WorkerProfileSectionProps {
    pub worker_id: String,
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
}

/// Worker profile page: the worker's details, the services they offer, and
/// the booking form for a selected service.
#[component]
pub fn WorkerProfileSection(props: WorkerProfileSectionProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let client = use_context::<ApiClient>();
    let booking_client = client.clone();
    let worker_id = props.worker_id.clone();

    use_effect(move || {
        let client = client.clone();
        let worker_id = worker_id.clone();
        dispatch.call(AppAction::SetDetailLoading(true));

        spawn(async move {
            match client.worker_detail(&worker_id).await {
                Ok(worker) => dispatch.call(AppAction::SetWorkerDetail(Some(worker))),
                Err(_) => dispatch.call(AppAction::SetWorkerDetail(None)),
            }
            match client.worker_services(&worker_id).await {
                Ok(services) => dispatch.call(AppAction::SetWorkerServices(services)),
                Err(_) => dispatch.call(AppAction::SetWorkerServices(Vec::new())),
            }
            dispatch.call(AppAction::SetDetailLoading(false));
        });
    });

    if state().worker_detail.is_loading {
        return rsx! {
            LoadingIndicator { message: "Loading worker profile...".to_string() }
        };
    }

    let Some(worker) = state().worker_detail.worker.clone() else {
        return rsx! {
            div {
                class: "profile-missing",
                "This worker is no longer listed."
            }
        };
    };
    let booking_worker_id = worker.id.clone();

    rsx! {
        div {
            class: "worker-profile",

            div {
                class: "profile-header",
                if let Some(image) = &worker.image {
                    img {
                        class: "profile-image",
                        src: "{image}",
                        alt: "{worker.name}"
                    }
                }
                h1 { class: "profile-name", "{worker.name}" }
                p { class: "profile-service", "{worker.service}" }
                if let Some(description) = &worker.description {
                    p { class: "profile-description", "{description}" }
                }
            }

            div {
                class: "service-list",
                h2 { "Services" }
                if state().worker_detail.services.is_empty() {
                    p { class: "service-list-empty", "No services listed yet." }
                }
                for (service_id, service) in state().worker_detail.services.into_iter().map(|s| (s.id.clone(), s)) {
                    div {
                        key: "{service.id}",
                        class: if state().worker_detail.selected_service.as_deref() == Some(service.id.as_str()) {
                            "service-row selected"
                        } else {
                            "service-row"
                        },
                        onclick: move |_| dispatch.call(AppAction::SelectService(service_id.clone())),
                        span { class: "service-name", "{service.name}" }
                        span { class: "service-price", "₹{service.price}" }
                        if let Some(description) = &service.description {
                            p { class: "service-description", "{description}" }
                        }
                    }
                }
            }

            div {
                class: "booking-form",
                h2 { "Book This Worker" }

                div {
                    class: "input-section",
                    label { class: "input-label", "Date:" }
                    ValidatedInput {
                        value: state().worker_detail.booking_date,
                        placeholder: "Date".to_string(),
                        input_type: InputType::Date,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: state().worker_detail.is_booking,
                        on_change: move |data: String| {
                            dispatch.call(AppAction::SetBookingDate(data));
                        }
                    }
                }

                div {
                    class: "input-section",
                    label { class: "input-label", "Time slot:" }
                    ValidatedInput {
                        value: state().worker_detail.booking_slot,
                        placeholder: "e.g. 10:00-11:00".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: state().worker_detail.is_booking,
                        on_change: move |data: String| {
                            dispatch.call(AppAction::SetBookingSlot(data));
                        }
                    }
                }

                button {
                    class: "submit-button",
                    disabled: state().worker_detail.is_booking || !validate_booking_ready(&state()),
                    onclick: move |_| {
                        let current_state = state();
                        let Some(service_id) = current_state.worker_detail.selected_service.clone() else {
                            return;
                        };
                        let request = BookingRequest {
                            worker_id: booking_worker_id.clone(),
                            service_id,
                            date: current_state.worker_detail.booking_date.clone(),
                            slot: current_state.worker_detail.booking_slot.clone(),
                        };

                        dispatch.call(AppAction::SetBooking(true));
                        dispatch.call(AppAction::SetBookingResponse(None));

                        let client = booking_client.clone();
                        spawn(async move {
                            match client.create_booking(&request).await {
                                Ok(response) => {
                                    dispatch.call(AppAction::SetBookingResponse(Some(response)));
                                }
                                Err(e) => {
                                    dispatch.call(AppAction::SetBookingResponse(Some(BookingResponse {
                                        success: false,
                                        message: Some(format!("Error: {}", e)),
                                    })));
                                }
                            }
                            dispatch.call(AppAction::SetBooking(false));
                        });
                    },
                    if state().worker_detail.is_booking {
                        "Booking..."
                    } else {
                        "Book Now"
                    }
                }

                if let Some(result) = &state().worker_detail.booking_response {
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
}
