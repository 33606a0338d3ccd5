use dioxus::prelude::*;
use shared_ui::Button;

use super::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Página não encontrada: /{path}" }
            Button {
                onclick: move |_| {
                    navigator().push(Route::Home {});
                },
                "Voltar ao início"
            }
        }
    }
}
