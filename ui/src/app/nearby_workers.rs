use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::display::{LoadingIndicator, WorkerCard};
use crate::console_warn;
use crate::marketplace::{nearby_workers, AppAction, AppState};
use crate::services::client::ApiClient;
use crate::utils::geo::GeoPoint;

#[derive(Props, PartialEq, Clone)]
pub struct NearbyWorkersSectionProps {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
    /// Called with the worker id when a card is selected
    pub on_select: EventHandler<String>,
}

/// Discovery grid: asks the browser for the user's position, then shows the
/// approved workers within service range.
#[component]
pub fn NearbyWorkersSection(props: NearbyWorkersSectionProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_select = props.on_select;
    let client = use_context::<ApiClient>();

    // Ask the browser for the user's position once on mount.
    use_effect(move || {
        request_location(dispatch);
    });

    // Fetch and filter the worker list whenever a position arrives. The
    // memo keeps worker updates from re-triggering the fetch.
    let location = use_memo(move || state().discovery.location);
    use_effect(move || {
        if let Some(location) = location() {
            let client = client.clone();
            spawn(async move {
                match nearby_workers(&client, location).await {
                    Ok(workers) => dispatch.call(AppAction::SetWorkers(workers)),
                    // Failures were already surfaced through the popup sink
                    Err(_) => {}
                }
                dispatch.call(AppAction::SetDiscoveryLoading(false));
            });
        }
    });

    rsx! {
        div {
            class: "discovery-section",

            h1 {
                class: "discovery-title",
                "Workers Near You"
            }

            if state().discovery.is_loading {
                LoadingIndicator { message: "Finding workers near you...".to_string() }
            } else if state().discovery.location.is_none() {
                div {
                    class: "discovery-hint",
                    "Enable location access to see workers in your area."
                }
            } else if state().discovery.workers.is_empty() {
                div {
                    class: "discovery-hint",
                    "No workers available in your area right now."
                }
            } else {
                div {
                    class: "worker-grid",
                    for worker in state().discovery.workers {
                        WorkerCard {
                            key: "{worker.id}",
                            worker: worker.clone(),
                            on_select: move |id: String| on_select.call(id)
                        }
                    }
                }
            }
        }
    }
}

/// Ask the browser for the current position; the result lands in state and
/// the fetch effect takes it from there.
fn request_location(dispatch: EventHandler<AppAction>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(geolocation) = window.navigator().geolocation() else {
        console_warn!("Geolocation API unavailable");
        return;
    };

    dispatch.call(AppAction::SetDiscoveryLoading(true));

    let on_position = Closure::once(move |position: web_sys::Position| {
        let coords = position.coords();
        dispatch.call(AppAction::SetLocation(Some(GeoPoint {
            lat: coords.latitude(),
            long: coords.longitude(),
        })));
    });

    let on_error = Closure::once(move |_err: web_sys::PositionError| {
        console_warn!("Geolocation request denied or failed");
        dispatch.call(AppAction::SetLocation(None));
        dispatch.call(AppAction::SetDiscoveryLoading(false));
    });

    if geolocation
        .get_current_position_with_error_callback(
            on_position.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        console_warn!("Geolocation request could not be issued");
        dispatch.call(AppAction::SetDiscoveryLoading(false));
    }

    // The callbacks outlive this call; the browser holds the only reference.
    on_position.forget();
    on_error.forget();
}
