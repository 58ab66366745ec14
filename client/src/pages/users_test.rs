use super::*;

fn user(id: &str, role: Option<&str>) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: format!("{id}@school.test"),
        role: role.map(str::to_owned),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn role_cell_normalizes_known_roles_and_keeps_unknown_tags() {
    assert_eq!(role_cell(&user("1", Some("admin"))), "Admin");
    assert_eq!(role_cell(&user("1", Some(" Janitor "))), "Janitor");
    assert_eq!(role_cell(&user("1", None)), EMPTY_CELL);
}

#[test]
fn only_admins_delete_and_never_themselves() {
    let admin = user("a", Some("Admin"));
    let instructor = user("i", Some("Instructor"));
    let student = user("s", Some("Student"));

    assert!(can_delete_user(Some(&admin), &student));
    assert!(!can_delete_user(Some(&admin), &admin));
    assert!(!can_delete_user(Some(&instructor), &student));
    assert!(!can_delete_user(None, &student));
}
