use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMenu, LdX};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

const NAV_LINKS: &[(&str, &str)] = &[
    ("#features", "Funcionalidades"),
    ("#pricing", "Preços"),
    ("#about", "Sobre"),
    ("#contact", "Contato"),
];

/// Landing page header with anchor navigation and a collapsible mobile menu.
#[component]
pub fn SiteHeader(on_login: EventHandler<()>) -> Element {
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "site-header",
            div { class: "site-header-inner",
                span { class: "site-brand", "Futurize Now" }

                nav { class: "site-nav",
                    for (href , label) in NAV_LINKS {
                        a { class: "site-nav-link", href: *href, "{label}" }
                    }
                }

                div { class: "site-header-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_login.call(()),
                        "Entrar"
                    }
                    Button { onclick: move |_| on_login.call(()), "Começar Grátis" }
                }

                button {
                    class: "site-menu-toggle",
                    aria_label: "Abrir menu",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    if menu_open() {
                        Icon::<LdX> { icon: LdX, width: 24, height: 24 }
                    } else {
                        Icon::<LdMenu> { icon: LdMenu, width: 24, height: 24 }
                    }
                }
            }

            if menu_open() {
                nav { class: "site-nav-mobile",
                    for (href , label) in NAV_LINKS {
                        a {
                            class: "site-nav-link",
                            href: *href,
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    div { class: "site-nav-mobile-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_login.call(()),
                            "Entrar"
                        }
                        Button { onclick: move |_| on_login.call(()), "Começar Grátis" }
                    }
                }
            }
        }
    }
}
