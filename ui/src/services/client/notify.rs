use tracing::info;

/// Fire-and-forget sink for user-visible failure notifications.
///
/// The request client never consumes a return value; delivery is the app
/// shell's concern (a popup in the browser, a recording stub in tests).
pub trait NotificationSink {
    fn notify(&self, message: &str);
}

/// Navigation seam invoked on unrecoverable session failure.
pub trait LoginRedirect {
    fn redirect_to_login(&self);
}

/// Redirects by assigning `window.location`, like a top-level navigation.
pub struct WindowNavigator {
    login_path: String,
}

impl WindowNavigator {
    pub fn new(login_path: &str) -> Self {
        Self {
            login_path: login_path.to_string(),
        }
    }
}

impl LoginRedirect for WindowNavigator {
    fn redirect_to_login(&self) {
        info!("Redirecting to login: {}", self.login_path);
        if let Some(window) = web_sys::window() {
            // A failed assignment leaves the user on the current page with
            // the notification already shown; nothing more we can do here.
            let _ = window.location().set_href(&self.login_path);
        }
    }
}
