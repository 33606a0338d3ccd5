use serde::{Deserialize, Serialize};

use crate::{Role, ALL_ROLES};

/// One of the four mutually-exclusive dashboard panels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Overview,
    Projects,
    Ideas,
    Feedback,
}

/// A fixed navigation entry. `roles` lists who sees it; the order of `MENU`
/// is the order rendered in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuEntry {
    pub tab: DashboardTab,
    pub label: &'static str,
    pub roles: &'static [Role],
}

/// The full navigation table, fixed at compile time.
pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        tab: DashboardTab::Overview,
        label: "Dashboard",
        roles: ALL_ROLES,
    },
    MenuEntry {
        tab: DashboardTab::Projects,
        label: "Projetos",
        roles: ALL_ROLES,
    },
    MenuEntry {
        tab: DashboardTab::Ideas,
        label: "Ideias",
        roles: &[Role::Admin, Role::Colaborador],
    },
    MenuEntry {
        tab: DashboardTab::Feedback,
        label: "Feedback",
        roles: ALL_ROLES,
    },
];

/// Menu entries visible to `role`, preserving `MENU` order.
pub fn visible_entries(role: Role) -> impl Iterator<Item = &'static MenuEntry> {
    MENU.iter().filter(move |entry| entry.roles.contains(&role))
}

/// Whether the sidebar offers `tab` to `role`.
pub fn tab_visible(tab: DashboardTab, role: Role) -> bool {
    visible_entries(role).any(|entry| entry.tab == tab)
}

/// Resolve a selected tab against the role's visible set. A tab the role
/// cannot see falls back to the first visible entry instead of rendering
/// an empty panel area.
pub fn clamp_tab(tab: DashboardTab, role: Role) -> DashboardTab {
    if tab_visible(tab, role) {
        tab
    } else {
        visible_entries(role)
            .next()
            .map(|entry| entry.tab)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs_for(role: Role) -> Vec<DashboardTab> {
        visible_entries(role).map(|entry| entry.tab).collect()
    }

    #[test]
    fn every_role_sees_a_non_empty_menu() {
        for role in ALL_ROLES {
            assert!(!tabs_for(*role).is_empty(), "{role:?} has an empty menu");
        }
    }

    #[test]
    fn filtering_preserves_menu_order() {
        for role in ALL_ROLES {
            let positions: Vec<usize> = visible_entries(*role)
                .map(|entry| MENU.iter().position(|m| m.tab == entry.tab).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            assert_eq!(positions, sorted);
        }
    }

    #[test]
    fn admin_menu_is_a_superset_of_other_roles() {
        let admin = tabs_for(Role::Admin);
        for role in [Role::Colaborador, Role::Observador] {
            for tab in tabs_for(role) {
                assert!(admin.contains(&tab), "{tab:?} missing from admin menu");
            }
        }
    }

    #[test]
    fn ideas_hidden_from_observador() {
        assert!(!tab_visible(DashboardTab::Ideas, Role::Observador));
        assert!(tab_visible(DashboardTab::Ideas, Role::Admin));
        assert!(tab_visible(DashboardTab::Ideas, Role::Colaborador));
    }

    #[test]
    fn clamp_redirects_hidden_tab_to_first_visible() {
        assert_eq!(
            clamp_tab(DashboardTab::Ideas, Role::Observador),
            DashboardTab::Overview
        );
    }

    #[test]
    fn clamp_is_identity_on_visible_tabs() {
        for role in ALL_ROLES {
            for entry in visible_entries(*role) {
                assert_eq!(clamp_tab(entry.tab, *role), entry.tab);
            }
        }
    }
}
