use dioxus::prelude::*;
use shared_types::fixtures::{self, Project};
use shared_types::Role;
use shared_ui::{
    Badge, Button, ButtonSize, ButtonVariant, Card, CardAction, CardContent, CardDescription,
    CardHeader, CardTitle, PageActions, PageHeader, PageTitle,
};

use super::{priority_badge, status_badge};
use crate::session::{can, Action};

// The filter chips are presentational: the demo data is a fixed set.
const PROJECT_FILTERS: &[&str] = &["Todos", "Em Andamento", "Concluídos", "Pausados"];

#[component]
pub fn ProjectsPanel(role: Role) -> Element {
    let can_edit = can(&role, Action::EditProject);

    rsx! {
        PageHeader {
            PageTitle { "Projetos" }
            if can(&role, Action::CreateProject) {
                PageActions {
                    Button { "+ Novo Projeto" }
                }
            }
        }

        div { class: "filter-row",
            for label in PROJECT_FILTERS {
                Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "{label}" }
            }
        }

        div { class: "panel-grid",
            for project in fixtures::demo_projects() {
                ProjectCard { project, can_edit }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project, can_edit: bool) -> Element {
    let (status_variant, status_label) = status_badge(project.status);
    let (priority_variant, priority_label) = priority_badge(project.priority);

    rsx! {
        Card {
            CardHeader {
                div {
                    CardTitle { "{project.title}" }
                    CardDescription { "{project.description}" }
                }
                if can_edit {
                    CardAction {
                        Button { variant: ButtonVariant::Outline, size: ButtonSize::Sm, "Editar" }
                    }
                }
            }
            CardContent {
                div { class: "card-badges",
                    Badge { variant: status_variant, "{status_label}" }
                    Badge { variant: priority_variant, "{priority_label}" }
                }
                div { class: "progress-block",
                    div { class: "progress-meta",
                        span { class: "progress-label", "Progresso" }
                        span { class: "progress-percent", "{project.progress}%" }
                    }
                    div { class: "progress-track",
                        div {
                            class: "progress-fill",
                            style: "width: {project.progress}%",
                        }
                    }
                }
            }
        }
    }
}
