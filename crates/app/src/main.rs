use dioxus::prelude::*;

mod components;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
