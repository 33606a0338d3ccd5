use dioxus::prelude::*;
use shared_types::fixtures::{self, ActivityEntry, ProjectSummary, StatEntry};
use shared_ui::{Badge, Card, CardContent, CardHeader, CardTitle, PageHeader, PageTitle};

use super::priority_badge;

/// Overview panel: headline stats, recent projects and recent activity.
#[component]
pub fn OverviewPanel() -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Dashboard" }
        }

        div { class: "stats-grid",
            for stat in fixtures::demo_stats() {
                StatCard { stat }
            }
        }

        div { class: "overview-columns",
            Card {
                CardHeader {
                    CardTitle { "Projetos Recentes" }
                }
                CardContent {
                    div { class: "overview-list",
                        for project in fixtures::recent_projects() {
                            RecentProjectRow { project }
                        }
                    }
                }
            }
            Card {
                CardHeader {
                    CardTitle { "Atividades Recentes" }
                }
                CardContent {
                    div { class: "overview-list",
                        for activity in fixtures::demo_activities() {
                            ActivityRow { activity }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(stat: StatEntry) -> Element {
    rsx! {
        Card {
            CardContent {
                h3 { class: "stat-title", "{stat.title}" }
                div { class: "stat-row",
                    p { class: "stat-value", "{stat.value}" }
                    span { class: "stat-trend", "{stat.trend}" }
                }
            }
        }
    }
}

#[component]
fn RecentProjectRow(project: ProjectSummary) -> Element {
    let (variant, label) = priority_badge(project.priority);
    let status = project.status.label();

    rsx! {
        div { class: "overview-project-row",
            div {
                p { class: "overview-project-name", "{project.name}" }
                p { class: "overview-project-status", "{status}" }
            }
            Badge { variant, "{label}" }
        }
    }
}

#[component]
fn ActivityRow(activity: ActivityEntry) -> Element {
    rsx! {
        div { class: "overview-activity-row",
            span { class: "overview-activity-dot" }
            div {
                p { class: "overview-activity-text", "{activity.text}" }
                p { class: "overview-activity-time", "{activity.time}" }
            }
        }
    }
}
