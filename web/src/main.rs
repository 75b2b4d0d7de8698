use dioxus::prelude::*;
use ui::components::forms::{LoginFormComponent, OtpFormComponent, SignupFormComponent};
use ui::marketplace::{AppAction, AppState};
use ui::{AppShell, NearbyWorkersSection, WorkerProfileSection};

const FAVICON: Asset = asset!("/assets/favicon.png");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppShell {
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
    #[route("/signup")]
    Signup {},
    #[route("/otp")]
    Otp {},
    #[route("/login")]
    Login {},
    #[route("/worker/:id")]
    WorkerDetail { id: String },
}

#[component]
fn Home() -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_context::<EventHandler<AppAction>>();
    let nav = navigator();

    rsx! {
        NearbyWorkersSection {
            state: state,
            dispatch: dispatch,
            on_select: move |id: String| {
                nav.push(Route::WorkerDetail { id });
            }
        }
    }
}

#[component]
fn Signup() -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_context::<EventHandler<AppAction>>();
    let nav = navigator();

    rsx! {
        div {
            class: "auth-page",
            SignupFormComponent {
                state: state,
                dispatch: dispatch,
                on_complete: move |_| {
                    nav.push(Route::Otp {});
                }
            }
            p {
                class: "auth-switch",
                "Already have an account? "
                Link { to: Route::Login {}, "Sign In" }
            }
        }
    }
}

#[component]
fn Otp() -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_context::<EventHandler<AppAction>>();
    let nav = navigator();

    rsx! {
        div {
            class: "auth-page",
            OtpFormComponent {
                state: state,
                dispatch: dispatch,
                on_complete: move |_| {
                    nav.push(Route::Login {});
                }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_context::<EventHandler<AppAction>>();
    let nav = navigator();

    rsx! {
        div {
            class: "auth-page",
            LoginFormComponent {
                state: state,
                dispatch: dispatch,
                on_complete: move |_| {
                    nav.push(Route::Home {});
                }
            }
            p {
                class: "auth-switch",
                "No account yet? "
                Link { to: Route::Signup {}, "Sign Up" }
            }
        }
    }
}

#[component]
fn WorkerDetail(id: String) -> Element {
    let state = use_context::<Signal<AppState>>();
    let dispatch = use_context::<EventHandler<AppAction>>();

    rsx! {
        WorkerProfileSection {
            worker_id: id,
            state: state,
            dispatch: dispatch,
        }
    }
}
