use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::display::ErrorPopup;
use crate::marketplace::{AppAction, AppState};
use crate::services::client::{ApiClient, NotificationSink};
use crate::services::config::ApiConfig;

/// Bridges the request client's fire-and-forget notification sink to the
/// popup queue in application state.
pub struct PopupNotifier {
    dispatch: EventHandler<AppAction>,
}

impl PopupNotifier {
    pub fn new(dispatch: EventHandler<AppAction>) -> Self {
        Self { dispatch }
    }
}

impl NotificationSink for PopupNotifier {
    fn notify(&self, message: &str) {
        self.dispatch
            .call(AppAction::PushNotification(message.to_string()));
    }
}

/// Application shell: owns the state signal, the dispatch reducer, and the
/// wired-up API client, and provides all three through context to whatever
/// page the router renders inside it.
#[component]
pub fn AppShell(children: Element) -> Element {
    // Consolidated state management; in-place reduction preserves Dioxus
    // Signal reactivity.
    let mut state = use_signal(AppState::default);

    let dispatch = EventHandler::new(move |action: AppAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    use_context_provider(|| state);
    use_context_provider(|| dispatch);
    use_context_provider(|| {
        ApiClient::browser(&ApiConfig::default(), Rc::new(PopupNotifier::new(dispatch)))
    });

    rsx! {
        div {
            class: "marketplace-app",
            ErrorPopup { state: state, dispatch: dispatch }
            {children}
        }
    }
}
