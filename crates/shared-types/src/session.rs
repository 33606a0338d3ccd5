use serde::{Deserialize, Serialize};

use crate::Role;

/// The signed-in user as shown in the dashboard chrome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentUser {
    pub name: String,
    pub role: Role,
}

/// In-memory session record. A present `user` means authenticated — there
/// is no separate flag to drift out of sync with it. Lost on reload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    pub user: Option<CurrentUser>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Simulated login: always succeeds and discards the password. The
    /// display name is the local part of the email.
    pub fn login(&mut self, email: &str, _password: &str, role: Role) {
        self.user = Some(CurrentUser {
            name: display_name_from_email(email),
            role,
        });
    }

    /// Clear the session. Safe to call when already signed out.
    pub fn logout(&mut self) {
        self.user = None;
    }
}

/// Everything before the first `@`, or the whole string when there is none.
pub fn display_name_from_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, _)) => local.to_string(),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_derives_name_from_email_local_part() {
        let mut session = Session::default();
        session.login("ana@x.com", "secret", Role::Admin);

        assert!(session.is_authenticated());
        let user = session.user.as_ref().unwrap();
        assert_eq!(user.name, "ana");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn login_without_at_sign_keeps_full_string() {
        assert_eq!(display_name_from_email("ana"), "ana");
        assert_eq!(display_name_from_email("ana@x@y"), "ana");
        assert_eq!(display_name_from_email(""), "");
    }

    #[test]
    fn logout_resets_regardless_of_prior_role() {
        for role in crate::ALL_ROLES {
            let mut session = Session::default();
            session.login("maria@futurize.com", "pw", *role);
            session.logout();
            assert_eq!(session, Session { user: None });
            assert!(!session.is_authenticated());
        }
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = Session::default();
        session.login("pedro@x.com", "pw", Role::Observador);
        session.logout();
        let once = session.clone();
        session.logout();
        assert_eq!(session, once);
    }

    #[test]
    fn session_serialization_roundtrip() {
        let mut session = Session::default();
        session.login("joao@futurize.com", "pw", Role::Colaborador);

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(session, deserialized);
    }
}
