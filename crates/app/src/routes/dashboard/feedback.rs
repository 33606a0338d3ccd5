use dioxus::prelude::*;
use shared_types::fixtures::{self, FeedbackEntry, RATING_SCALE};
use shared_types::Role;
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardContent, PageActions, PageHeader,
    PageTitle,
};

use super::feedback_badge;
use crate::session::{can, Action};

const FEEDBACK_FILTERS: &[&str] = &["Todos", "Positivos", "Negativos", "Pendentes"];

#[component]
pub fn FeedbackPanel(role: Role) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Feedback de Clientes" }
            if can(&role, Action::CreateFeedback) {
                PageActions {
                    Button { "+ Novo Feedback" }
                }
            }
        }

        div { class: "filter-row",
            for label in FEEDBACK_FILTERS {
                Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "{label}" }
            }
        }

        div { class: "panel-grid",
            for entry in fixtures::demo_feedback() {
                FeedbackCard { entry }
            }
        }
    }
}

#[component]
fn FeedbackCard(entry: FeedbackEntry) -> Element {
    let (variant, label) = feedback_badge(entry.status);

    rsx! {
        Card {
            CardContent {
                div { class: "feedback-row",
                    div { class: "feedback-main",
                        div { class: "feedback-heading",
                            h3 { class: "feedback-client", "{entry.client}" }
                            span { class: "feedback-project", "Projeto: {entry.project}" }
                            RatingStars { rating: entry.rating }
                        }
                        p { class: "feedback-message", "{entry.message}" }
                        div { class: "feedback-meta",
                            span { "{entry.date}" }
                            Badge { variant, "{label}" }
                        }
                    }
                    Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "Responder" }
                }
            }
        }
    }
}

/// Fixed-length star row: always `RATING_SCALE` stars, filled up to `rating`.
#[component]
fn RatingStars(rating: u8) -> Element {
    rsx! {
        div { class: "rating-stars",
            for i in 0..RATING_SCALE {
                span { class: if i < rating { "star filled" } else { "star" }, "★" }
            }
        }
    }
}
