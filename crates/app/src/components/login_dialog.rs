use dioxus::prelude::*;
use shared_types::{Role, ALL_ROLES};
use shared_ui::{Dialog, DialogHeader, DialogTitle, Input, Label};

use crate::routes::Route;
use crate::session::use_session;

/// Login modal. Credentials are not verified anywhere: submission always
/// succeeds and the chosen role drives everything downstream.
#[component]
pub fn LoginDialog(open: bool, on_close: EventHandler<()>) -> Element {
    let mut state = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        state.login(&email(), &password(), role());
        on_close.call(());
        navigator().push(Route::Dashboard {});
    };

    rsx! {
        Dialog { open, on_close: move |_| on_close.call(()),
            DialogHeader {
                DialogTitle { "Login - Futurize Now" }
            }
            form { class: "login-form", onsubmit: handle_submit,
                div { class: "login-field",
                    Label { html_for: "login-email", "Email" }
                    Input {
                        id: "login-email",
                        input_type: "email",
                        placeholder: "seu@email.com",
                        required: true,
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "login-field",
                    Label { html_for: "login-password", "Senha" }
                    Input {
                        id: "login-password",
                        input_type: "password",
                        placeholder: "••••••••",
                        required: true,
                        value: password(),
                        on_input: move |e: FormEvent| password.set(e.value()),
                    }
                }
                div { class: "login-field",
                    Label { html_for: "login-role", "Função" }
                    select {
                        class: "input",
                        id: "login-role",
                        value: role().as_str(),
                        onchange: move |e| role.set(Role::from_str_or_default(&e.value())),
                        for option_role in ALL_ROLES {
                            option { value: option_role.as_str(), "{option_role.display_name()}" }
                        }
                    }
                }
                button { r#type: "submit", class: "button login-submit", "Entrar" }
            }
        }
    }
}
