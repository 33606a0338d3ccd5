use serde::{Deserialize, Serialize};

/// Access level controlling which navigation items and actions are visible.
///
/// - `Admin` — full access, including customer feedback management.
/// - `Colaborador` — can create and edit projects and register ideas.
/// - `Observador` — view-only access; the ideas section is hidden entirely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    #[default]
    Colaborador,
    Observador,
}

/// All roles offered by the login form, in display order.
pub const ALL_ROLES: &[Role] = &[Role::Admin, Role::Colaborador, Role::Observador];

impl Role {
    /// Parse the login form value. Unknown values default to Colaborador,
    /// matching the form's pre-selected option.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "admin" => Role::Admin,
            "observador" => Role::Observador,
            _ => Role::Colaborador,
        }
    }

    /// Lowercase key used for form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Colaborador => "colaborador",
            Role::Observador => "observador",
        }
    }

    /// Capitalized label shown in the dashboard header and role badge.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Colaborador => "Colaborador",
            Role::Observador => "Observador",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_str_or_default_known_values() {
        assert_eq!(Role::from_str_or_default("admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("Admin"), Role::Admin);
        assert_eq!(Role::from_str_or_default("colaborador"), Role::Colaborador);
        assert_eq!(Role::from_str_or_default("observador"), Role::Observador);
        assert_eq!(Role::from_str_or_default("OBSERVADOR"), Role::Observador);
    }

    #[test]
    fn role_from_str_or_default_unknown_falls_to_colaborador() {
        assert_eq!(Role::from_str_or_default(""), Role::Colaborador);
        assert_eq!(Role::from_str_or_default("gerente"), Role::Colaborador);
    }

    #[test]
    fn role_as_str_roundtrip() {
        for role in ALL_ROLES {
            assert_eq!(Role::from_str_or_default(role.as_str()), *role);
        }
    }
}
