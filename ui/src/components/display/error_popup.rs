use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::marketplace::{AppAction, AppState};

/// How long a notification stays on screen
const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Props, PartialEq, Clone)]
pub struct ErrorPopupProps {
    pub state: Signal<AppState>,
    pub dispatch: EventHandler<AppAction>,
}

/// Popup rendering the oldest pending notification, self-dismissing after a
/// few seconds. The request client pushes into the queue through its
/// notification sink; this component drains it.
#[component]
pub fn ErrorPopup(props: ErrorPopupProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    // Shield the timer effect from unrelated state changes: it only reruns
    // when the queue itself moves.
    let pending = use_memo(move || {
        let snapshot = state();
        (
            snapshot.notifications.len(),
            snapshot.notifications.front().cloned(),
        )
    });

    use_effect(move || {
        if pending().1.is_some() {
            spawn(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                dispatch.call(AppAction::DismissNotification);
            });
        }
    });

    match pending().1 {
        Some(message) => rsx! {
            div {
                class: "error-popup",
                style: "position: fixed; top: 16px; right: 16px; z-index: 50; color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 12px; border-radius: 4px;",
                "⚠ {message}"
            }
        },
        None => rsx! { div {} },
    }
}
