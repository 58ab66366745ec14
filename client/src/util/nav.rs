//! Sidebar navigation per role.
//!
//! `nav_data_by_role` is the only place menus are defined; pages and the
//! sidebar never assemble links themselves.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::config::HELP_CENTER_URL;
use crate::util::role::Role;

/// One link in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    /// Route path, or an absolute URL when `external` is set.
    pub path: &'static str,
    /// Material icon ligature name.
    pub icon: &'static str,
    /// Opens outside the app in a new tab.
    pub external: bool,
}

/// A titled group of links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

const fn link(title: &'static str, path: &'static str, icon: &'static str) -> NavItem {
    NavItem { title, path, icon, external: false }
}

const fn external(title: &'static str, path: &'static str, icon: &'static str) -> NavItem {
    NavItem { title, path, icon, external: true }
}

const PROFILE: NavItem = link("Profile", "/profile", "person");
const HELP_CENTER: NavItem = external("Help Center", HELP_CENTER_URL, "help_outline");

pub const ADMIN_NAV: &[NavSection] = &[
    NavSection { title: "Overview", items: &[link("Dashboard", "/dashboard", "dashboard")] },
    NavSection {
        title: "Management",
        items: &[
            link("Users", "/users", "group"),
            link("Roles", "/roles", "admin_panel_settings"),
            link("Courses", "/courses", "menu_book"),
            link("Transactions", "/transactions", "receipt_long"),
        ],
    },
    NavSection { title: "Account", items: &[PROFILE] },
];

pub const INSTRUCTOR_NAV: &[NavSection] = &[
    NavSection {
        title: "Teaching",
        items: &[link("Courses", "/courses", "menu_book"), link("Students", "/users", "school")],
    },
    NavSection { title: "Account", items: &[PROFILE, HELP_CENTER] },
];

pub const PARENT_NAV: &[NavSection] = &[
    NavSection {
        title: "Family",
        items: &[link("Courses", "/courses", "menu_book"), link("Payments", "/transactions", "payments")],
    },
    NavSection { title: "Account", items: &[PROFILE, HELP_CENTER] },
];

pub const STUDENT_NAV: &[NavSection] = &[
    NavSection { title: "Learning", items: &[link("My Courses", "/courses", "menu_book")] },
    NavSection { title: "Account", items: &[PROFILE, HELP_CENTER] },
];

pub const DONOR_NAV: &[NavSection] = &[
    NavSection { title: "Giving", items: &[link("Donations", "/transactions", "volunteer_activism")] },
    NavSection { title: "Account", items: &[PROFILE, HELP_CENTER] },
];

/// Navigation for `role`. An unknown or absent role gets the Admin menu.
///
/// The menu is cosmetic: route guards still resolve an absent role to
/// [`Role::LOWEST_PRIVILEGE`], so those links lead to an access-denied notice.
pub fn nav_data_by_role(role: Option<Role>) -> &'static [NavSection] {
    match role {
        Some(Role::Instructor) => INSTRUCTOR_NAV,
        Some(Role::Parent) => PARENT_NAV,
        Some(Role::Student) => STUDENT_NAV,
        Some(Role::Donor) => DONOR_NAV,
        Some(Role::Admin) | None => ADMIN_NAV,
    }
}

/// All internal route paths reachable from `sections`, in menu order.
pub fn internal_paths(sections: &[NavSection]) -> Vec<&'static str> {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .filter(|item| !item.external)
        .map(|item| item.path)
        .collect()
}
