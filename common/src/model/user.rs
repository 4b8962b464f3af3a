use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Last login as displayed, e.g. `2025-11-08 09:15`, or `-` for never.
    pub last_login: String,
}

/// Access role shown in the user table and chosen in the user dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    Programmer,
    #[default]
    #[serde(rename = "Field Officer")]
    FieldOfficer,
    Validator,
    Viewer,
}

/// Visual weight of a badge. The frontend maps each to a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Destructive => "badge badge-destructive",
            BadgeVariant::Outline => "badge badge-outline",
        }
    }
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Admin,
        Role::ProjectManager,
        Role::DataAnalyst,
        Role::Programmer,
        Role::FieldOfficer,
        Role::Validator,
        Role::Viewer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::ProjectManager => "Project Manager",
            Role::DataAnalyst => "Data Analyst",
            Role::Programmer => "Programmer",
            Role::FieldOfficer => "Field Officer",
            Role::Validator => "Validator",
            Role::Viewer => "Viewer",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    pub fn badge(self) -> BadgeVariant {
        match self {
            Role::Admin => BadgeVariant::Destructive,
            Role::ProjectManager => BadgeVariant::Default,
            Role::DataAnalyst | Role::Programmer | Role::Validator => BadgeVariant::Secondary,
            Role::FieldOfficer | Role::Viewer => BadgeVariant::Outline,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_badges() {
        assert_eq!(Role::Admin.badge(), BadgeVariant::Destructive);
        assert_eq!(Role::ProjectManager.badge(), BadgeVariant::Default);
        assert_eq!(Role::Validator.badge(), BadgeVariant::Secondary);
        assert_eq!(Role::Viewer.badge(), BadgeVariant::Outline);
    }

    #[test]
    fn role_labels_match_serde_names() {
        for role in Role::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.label()));
            assert_eq!(Role::from_label(role.label()), Some(role));
        }
    }
}
