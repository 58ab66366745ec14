//! Portal roles and the capabilities each one unlocks in the UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Roles only select which menus, routes, and buttons are shown. The backend
//! remains the authority for every privileged action; nothing here is a
//! security boundary.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

/// Route used when there is no signed-in user.
pub const LOGIN_PATH: &str = "/login";

/// User role tag as understood by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Instructor,
    Parent,
    Student,
    Donor,
}

/// UI action gated by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    DeleteUsers,
    ManageRoles,
    CreateCourses,
    DeleteCourses,
    RecordTransactions,
    DeleteTransactions,
}

impl Role {
    pub const ALL: [Self; 5] = [Self::Admin, Self::Instructor, Self::Parent, Self::Student, Self::Donor];

    /// Role assumed for a signed-in user whose role is missing or unknown.
    pub const LOWEST_PRIVILEGE: Self = Self::Donor;

    /// Roles offered on the self-service registration form.
    pub const REGISTERABLE: [Self; 4] = [Self::Student, Self::Instructor, Self::Parent, Self::Donor];

    /// Case-insensitive parse of a backend role tag.
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|role| role.as_str().eq_ignore_ascii_case(tag))
    }

    /// Parse, treating missing or unknown tags as [`Role::LOWEST_PRIVILEGE`].
    #[must_use]
    pub fn resolve(tag: Option<&str>) -> Self {
        tag.and_then(Self::parse).unwrap_or(Self::LOWEST_PRIVILEGE)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Instructor => "Instructor",
            Self::Parent => "Parent",
            Self::Student => "Student",
            Self::Donor => "Donor",
        }
    }

    /// Landing route after sign-in and the target of denied navigation.
    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Admin => "/dashboard",
            Self::Instructor | Self::Student => "/courses",
            Self::Parent | Self::Donor => "/transactions",
        }
    }

    /// Whether this role may see the control for `action`.
    #[must_use]
    pub fn can(self, action: Action) -> bool {
        match action {
            Action::DeleteUsers | Action::ManageRoles | Action::DeleteTransactions => self == Self::Admin,
            Action::CreateCourses | Action::DeleteCourses => matches!(self, Self::Admin | Self::Instructor),
            Action::RecordTransactions => matches!(self, Self::Admin | Self::Parent | Self::Donor),
        }
    }
}
