use dioxus::prelude::*;
use shared_types::fixtures::{self, Idea};
use shared_types::Role;
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle,
};

use crate::session::{can, Action};

#[component]
pub fn IdeasPanel(role: Role) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Ideias" }
            if can(&role, Action::CreateIdea) {
                PageActions {
                    Button { "+ Nova Ideia" }
                }
            }
        }

        div { class: "panel-grid",
            for idea in fixtures::demo_ideas() {
                IdeaCard { idea }
            }
        }
    }
}

#[component]
fn IdeaCard(idea: Idea) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "idea-row",
                    div { class: "idea-main",
                        h3 { class: "idea-title", "{idea.title}" }
                        p { class: "idea-description", "{idea.description}" }
                        div { class: "idea-meta",
                            span { "Por {idea.author}" }
                            span { "{idea.date}" }
                        }
                    }
                    div { class: "idea-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            size: ButtonSize::Sm,
                            "👍 {idea.votes}"
                        }
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "Comentar" }
                    }
                }
            }
        }
    }
}
