pub mod dashboard;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use dashboard::Dashboard;
use home::Home;
use not_found::NotFound;

use crate::session::use_session;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},

    #[layout(SessionGuard)]
    #[route("/dashboard")]
    Dashboard {},
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Layout that bounces signed-out visitors back to the landing page.
/// The session lives entirely in memory, so the check is synchronous.
#[component]
fn SessionGuard() -> Element {
    let state = use_session();

    if state.is_authenticated() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::Home {});
        rsx! {
            div { class: "guard-redirect",
                p { "Redirecionando..." }
            }
        }
    }
}
