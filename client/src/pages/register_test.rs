use super::*;

fn filled() -> RegistrationForm {
    RegistrationForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@school.test".to_owned(),
        password: "analytical".to_owned(),
        confirm: "analytical".to_owned(),
        role: "parent".to_owned(),
    }
}

#[test]
fn validate_registration_trims_and_normalizes_role() {
    let registration = validate_registration(&filled()).expect("valid");
    assert_eq!(registration.first_name, "Ada");
    assert_eq!(registration.role, "Parent");
}

#[test]
fn validate_registration_requires_names_and_email() {
    let form = RegistrationForm { last_name: "  ".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Enter your name and email."));
}

#[test]
fn validate_registration_checks_email_shape() {
    let form = RegistrationForm { email: "ada.school.test".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Enter a valid email address."));
}

#[test]
fn validate_registration_enforces_password_rules() {
    let short = RegistrationForm { password: "short".to_owned(), confirm: "short".to_owned(), ..filled() };
    assert_eq!(validate_registration(&short), Err("Password must be at least 8 characters."));

    let mismatch = RegistrationForm { confirm: "different1".to_owned(), ..filled() };
    assert_eq!(validate_registration(&mismatch), Err("Passwords do not match."));
}

#[test]
fn validate_registration_rejects_admin_self_signup() {
    let form = RegistrationForm { role: "Admin".to_owned(), ..filled() };
    assert_eq!(validate_registration(&form), Err("Choose an account type."));
}
