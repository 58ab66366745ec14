use super::*;

#[test]
fn parse_is_case_insensitive_and_trims() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" INSTRUCTOR "), Some(Role::Instructor));
    assert_eq!(Role::parse("Donor"), Some(Role::Donor));
}

#[test]
fn parse_unknown_is_none() {
    assert_eq!(Role::parse("Janitor"), None);
    assert_eq!(Role::parse(""), None);
}

#[test]
fn resolve_absent_role_is_lowest_privilege_not_admin() {
    assert_eq!(Role::resolve(None), Role::LOWEST_PRIVILEGE);
    assert_eq!(Role::resolve(Some("superuser")), Role::LOWEST_PRIVILEGE);
    assert_ne!(Role::LOWEST_PRIVILEGE, Role::Admin);
}

#[test]
fn as_str_round_trips_through_parse() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
}

#[test]
fn registerable_roles_exclude_admin() {
    assert!(!Role::REGISTERABLE.contains(&Role::Admin));
}

#[test]
fn home_paths_are_absolute_and_not_login() {
    for role in Role::ALL {
        assert!(role.home_path().starts_with('/'));
        assert_ne!(role.home_path(), LOGIN_PATH);
    }
}

#[test]
fn only_admin_manages_roles_and_users() {
    for role in Role::ALL {
        assert_eq!(role.can(Action::ManageRoles), role == Role::Admin);
        assert_eq!(role.can(Action::DeleteUsers), role == Role::Admin);
    }
}

#[test]
fn instructors_can_create_courses_students_cannot() {
    assert!(Role::Instructor.can(Action::CreateCourses));
    assert!(!Role::Student.can(Action::CreateCourses));
}

#[test]
fn donors_and_parents_record_transactions() {
    assert!(Role::Donor.can(Action::RecordTransactions));
    assert!(Role::Parent.can(Action::RecordTransactions));
    assert!(!Role::Student.can(Action::RecordTransactions));
    assert!(!Role::Donor.can(Action::DeleteTransactions));
}
