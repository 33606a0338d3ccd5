use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowRight, LdLayoutDashboard, LdLightbulb, LdTarget, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonSize, ButtonVariant, Card, CardContent};

use crate::components::{LoginDialog, SiteHeader};

/// Public landing page: hero, feature grid and the login dialog.
#[component]
pub fn Home() -> Element {
    let mut show_login = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "landing",
            SiteHeader { on_login: move |_| show_login.set(true) }

            section { class: "hero",
                div { class: "hero-inner",
                    h1 { class: "hero-title", "Futurize Now" }
                    p { class: "hero-tagline",
                        "Transforme suas ideias em realidade com nossa plataforma de gestão de projetos e inovação"
                    }
                    div { class: "hero-actions",
                        Button {
                            size: ButtonSize::Lg,
                            onclick: move |_| show_login.set(true),
                            "Começar Agora "
                            Icon::<LdArrowRight> { icon: LdArrowRight, width: 20, height: 20 }
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Lg, "Saiba Mais" }
                    }
                }
            }

            section { class: "features", id: "features",
                div { class: "features-inner",
                    div { class: "features-heading",
                        h2 { "Funcionalidades Poderosas" }
                        p { "Tudo que você precisa para gerenciar projetos inovadores" }
                    }
                    div { class: "features-grid",
                        FeatureCard {
                            title: "Gestão de Ideias",
                            description: "Capture e organize suas ideias mais inovadoras",
                            icon: rsx! { Icon::<LdLightbulb> { icon: LdLightbulb, width: 32, height: 32 } },
                        }
                        FeatureCard {
                            title: "Controle de Projetos",
                            description: "Acompanhe o progresso de todos os seus projetos",
                            icon: rsx! { Icon::<LdTarget> { icon: LdTarget, width: 32, height: 32 } },
                        }
                        FeatureCard {
                            title: "Feedback de Clientes",
                            description: "Colete e gerencie feedbacks dos seus clientes",
                            icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
                        }
                        FeatureCard {
                            title: "Analytics",
                            description: "Visualize métricas e progresso em tempo real",
                            icon: rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 32, height: 32 } },
                        }
                    }
                }
            }
        }

        LoginDialog {
            open: show_login(),
            on_close: move |_| show_login.set(false),
        }
    }
}

#[component]
fn FeatureCard(title: &'static str, description: &'static str, icon: Element) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "feature-icon", {icon} }
                h3 { class: "feature-title", "{title}" }
                p { class: "feature-description", "{description}" }
            }
        }
    }
}
