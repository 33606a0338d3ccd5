use dioxus::prelude::*;
use shared_types::{clamp_tab, DashboardTab, Role, Session};

/// Global session state, provided via context at the app root.
///
/// There is no backend: signing in always succeeds and the whole session
/// lives in these signals for the lifetime of the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
    pub active_tab: Signal<DashboardTab>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::default()),
            active_tab: Signal::new(DashboardTab::default()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// Signs in and resets the active tab to the first entry visible to
    /// the chosen role, so a tab left over from a previous session can
    /// never point at a panel the new role cannot see.
    pub fn login(&mut self, email: &str, password: &str, role: Role) {
        tracing::info!(role = role.as_str(), "signing in");
        self.session.write().login(email, password, role);
        self.active_tab
            .set(clamp_tab(DashboardTab::default(), role));
    }

    pub fn logout(&mut self) {
        tracing::info!("signing out");
        self.session.write().logout();
        self.active_tab.set(DashboardTab::default());
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        tracing::debug!(?tab, "tab selected");
        self.active_tab.set(tab);
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}

/// UI actions that are gated by the session role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    CreateProject,
    EditProject,
    CreateIdea,
    CreateFeedback,
}

/// Whether `role` may perform `action`. The match is exhaustive over the
/// closed role enum, so adding a role forces every gate to be revisited.
pub fn can(role: &Role, action: Action) -> bool {
    match action {
        Action::CreateProject | Action::EditProject | Action::CreateIdea => {
            matches!(role, Role::Admin | Role::Colaborador)
        }
        Action::CreateFeedback => matches!(role, Role::Admin),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_can_do_everything() {
        for action in [
            Action::CreateProject,
            Action::EditProject,
            Action::CreateIdea,
            Action::CreateFeedback,
        ] {
            assert!(can(&Role::Admin, action));
        }
    }

    #[test]
    fn colaborador_cannot_create_feedback() {
        assert!(can(&Role::Colaborador, Action::CreateProject));
        assert!(can(&Role::Colaborador, Action::EditProject));
        assert!(can(&Role::Colaborador, Action::CreateIdea));
        assert!(!can(&Role::Colaborador, Action::CreateFeedback));
    }

    #[test]
    fn observador_is_read_only() {
        for action in [
            Action::CreateProject,
            Action::EditProject,
            Action::CreateIdea,
            Action::CreateFeedback,
        ] {
            assert!(!can(&Role::Observador, action));
        }
    }
}
