pub mod feedback;
pub mod ideas;
pub mod overview;
pub mod projects;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutDashboard, LdLightbulb, LdTarget, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::fixtures::{FeedbackStatus, Priority, ProjectStatus};
use shared_types::{clamp_tab, visible_entries, DashboardTab, Role};
use shared_ui::{
    Avatar, AvatarFallback, Badge, BadgeVariant, Button, ButtonVariant, Navbar, Separator,
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu,
    SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator, SidebarTrigger,
};

use crate::routes::Route;
use crate::session::use_session;

/// Authenticated dashboard shell: role-filtered sidebar, top bar with the
/// session identity, and the panel selected by the active tab.
#[component]
pub fn Dashboard() -> Element {
    let mut state = use_session();

    let user = state.session.read().user.clone();
    let Some(user) = user else {
        // SessionGuard redirects before this renders without a session.
        return rsx! {};
    };

    let role = user.role;
    let tab = clamp_tab((state.active_tab)(), role);

    let initials: String = user
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    span { class: "sidebar-brand", "Futurize Now" }
                }
                SidebarSeparator {}
                SidebarContent {
                    SidebarMenu {
                        for entry in visible_entries(role) {
                            SidebarMenuItem {
                                SidebarMenuButton {
                                    active: tab == entry.tab,
                                    onclick: move |_| state.select_tab(entry.tab),
                                    TabIcon { tab: entry.tab }
                                    "{entry.label}"
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    RoleBadge { role }
                }
            }

            SidebarInset {
                Navbar {
                    div { class: "topbar",
                        SidebarTrigger {
                            span { class: "topbar-trigger-icon", "\u{2630}" }
                        }
                        Separator { horizontal: false }
                        span { class: "topbar-title", "{panel_title(tab)}" }
                        div { class: "topbar-spacer" }
                        div { class: "topbar-user",
                            Avatar {
                                AvatarFallback { "{initials}" }
                            }
                            div { class: "topbar-user-meta",
                                span { class: "topbar-user-name", "{user.name}" }
                                span { class: "topbar-user-role", "{role.display_name()}" }
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    state.logout();
                                    navigator().push(Route::Home {});
                                },
                                "Sair"
                            }
                        }
                    }
                }

                div { class: "page-content",
                    PanelHost { tab, role }
                }
            }
        }
    }
}

/// Renders exactly one panel for the selected tab.
#[component]
fn PanelHost(tab: DashboardTab, role: Role) -> Element {
    match tab {
        DashboardTab::Overview => rsx! {
            overview::OverviewPanel {}
        },
        DashboardTab::Projects => rsx! {
            projects::ProjectsPanel { role }
        },
        DashboardTab::Ideas => rsx! {
            ideas::IdeasPanel { role }
        },
        DashboardTab::Feedback => rsx! {
            feedback::FeedbackPanel { role }
        },
    }
}

fn panel_title(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Overview => "Dashboard",
        DashboardTab::Projects => "Projetos",
        DashboardTab::Ideas => "Ideias",
        DashboardTab::Feedback => "Feedback",
    }
}

#[component]
fn TabIcon(tab: DashboardTab) -> Element {
    match tab {
        DashboardTab::Overview => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        DashboardTab::Projects => rsx! {
            Icon::<LdTarget> { icon: LdTarget, width: 18, height: 18 }
        },
        DashboardTab::Ideas => rsx! {
            Icon::<LdLightbulb> { icon: LdLightbulb, width: 18, height: 18 }
        },
        DashboardTab::Feedback => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
    }
}

/// Shows the session role in the sidebar footer.
#[component]
fn RoleBadge(role: Role) -> Element {
    let variant = match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Colaborador => BadgeVariant::Primary,
        Role::Observador => BadgeVariant::Secondary,
    };

    rsx! {
        div { class: "sidebar-footer-row",
            span { class: "sidebar-footer-label", "Função" }
            Badge { variant, "{role.display_name()}" }
        }
    }
}

pub(crate) fn status_badge(status: ProjectStatus) -> (BadgeVariant, &'static str) {
    let variant = match status {
        ProjectStatus::Planejamento => BadgeVariant::Warning,
        ProjectStatus::EmAndamento => BadgeVariant::Primary,
        ProjectStatus::Concluido => BadgeVariant::Success,
    };
    (variant, status.label())
}

pub(crate) fn priority_badge(priority: Priority) -> (BadgeVariant, &'static str) {
    let variant = match priority {
        Priority::Alta => BadgeVariant::Destructive,
        Priority::Media => BadgeVariant::Warning,
    };
    (variant, priority.label())
}

pub(crate) fn feedback_badge(status: FeedbackStatus) -> (BadgeVariant, &'static str) {
    let variant = match status {
        FeedbackStatus::Respondido => BadgeVariant::Success,
        FeedbackStatus::Pendente => BadgeVariant::Warning,
    };
    (variant, status.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_panel(tab: DashboardTab, role: Role) -> String {
        let mut dom = VirtualDom::new_with_props(PanelHost, PanelHostProps { tab, role });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn each_tab_renders_exactly_one_panel() {
        let titles = [
            (DashboardTab::Overview, "Dashboard"),
            (DashboardTab::Projects, "Projetos"),
            (DashboardTab::Ideas, "Ideias"),
            (DashboardTab::Feedback, "Feedback de Clientes"),
        ];

        for (tab, title) in titles {
            let html = render_panel(tab, Role::Admin);
            assert_eq!(html.matches("<h1").count(), 1, "tab {tab:?}");
            assert!(html.contains(title), "tab {tab:?} missing {title:?}");
        }
    }

    #[test]
    fn projects_actions_follow_role() {
        let html = render_panel(DashboardTab::Projects, Role::Admin);
        assert!(html.contains("Novo Projeto"));
        assert!(html.contains("Editar"));

        let html = render_panel(DashboardTab::Projects, Role::Colaborador);
        assert!(html.contains("Novo Projeto"));
        assert!(html.contains("Editar"));

        let html = render_panel(DashboardTab::Projects, Role::Observador);
        assert!(!html.contains("Novo Projeto"));
        assert!(!html.contains("Editar"));
    }

    #[test]
    fn feedback_creation_is_admin_only() {
        let html = render_panel(DashboardTab::Feedback, Role::Admin);
        assert!(html.contains("Novo Feedback"));

        for role in [Role::Colaborador, Role::Observador] {
            let html = render_panel(DashboardTab::Feedback, role);
            assert!(!html.contains("Novo Feedback"), "role {role:?}");
        }
    }

    #[test]
    fn ideas_panel_offers_creation_to_contributors() {
        let html = render_panel(DashboardTab::Ideas, Role::Colaborador);
        assert!(html.contains("Nova Ideia"));
    }

    #[test]
    fn hidden_tab_is_clamped_before_rendering() {
        // Same resolution the shell applies to the active-tab signal.
        let tab = clamp_tab(DashboardTab::Ideas, Role::Observador);
        assert_eq!(tab, DashboardTab::Overview);

        let html = render_panel(tab, Role::Observador);
        assert!(html.contains("Dashboard"), "{html}");
        assert!(!html.contains("Nova Ideia"), "{html}");
    }

    #[test]
    fn feedback_panel_renders_full_star_rows() {
        let html = render_panel(DashboardTab::Feedback, Role::Admin);
        let cards = shared_types::fixtures::demo_feedback().len();
        let scale = usize::from(shared_types::fixtures::RATING_SCALE);
        assert_eq!(html.matches('★').count(), cards * scale);
    }
}
