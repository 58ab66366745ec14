use super::*;

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_deserializes_camel_case_fields() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"id":"u1","firstName":"Ada","lastName":"Lovelace","email":"ada@school.test","role":"Student"}"#,
    )
    .expect("profile");
    assert_eq!(profile.id, "u1");
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
    assert_eq!(profile.role.as_deref(), Some("Student"));
    assert_eq!(profile.role_kind(), Some(Role::Student));
}

#[test]
fn user_profile_accepts_numeric_underscore_id() {
    let profile: UserProfile = serde_json::from_str(r#"{"_id":42,"email":"x@y.test"}"#).expect("profile");
    assert_eq!(profile.id, "42");
    assert_eq!(profile.role, None);
}

#[test]
fn user_profile_accepts_role_object() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u2","role":{"name":"Donor"}}"#).expect("profile");
    assert_eq!(profile.role_kind(), Some(Role::Donor));
}

#[test]
fn user_profile_keeps_extra_fields() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u3","phone":"555-0100"}"#).expect("profile");
    assert_eq!(profile.extra.get("phone").and_then(Value::as_str), Some("555-0100"));
}

#[test]
fn user_profile_without_id_decodes_with_empty_id() {
    let profile: UserProfile = serde_json::from_str(r#"{"email":"x@y.test","role":"Student"}"#).expect("profile");
    assert_eq!(profile.id, "");
    assert_eq!(profile.role_kind(), Some(Role::Student));
}

#[test]
fn user_profile_numeric_role_reads_as_no_role() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u7","role":3}"#).expect("profile");
    assert_eq!(profile.role, None);
    assert_eq!(profile.with_default_role().role_kind(), Some(Role::LOWEST_PRIVILEGE));
}

#[test]
fn user_profile_boolean_role_reads_as_no_role() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u8","role":true}"#).expect("profile");
    assert_eq!(profile.role, None);
}

#[test]
fn with_default_role_fills_absent_role_with_lowest_privilege() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u4","role":""}"#).expect("profile");
    let profile = profile.with_default_role();
    assert_eq!(profile.role_kind(), Some(Role::LOWEST_PRIVILEGE));
    assert_ne!(profile.role_kind(), Some(Role::Admin));
}

#[test]
fn with_default_role_keeps_existing_role() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u5","role":"Admin"}"#).expect("profile");
    assert_eq!(profile.with_default_role().role.as_deref(), Some("Admin"));
}

#[test]
fn display_name_falls_back_to_email() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u6","email":"anon@school.test"}"#).expect("profile");
    assert_eq!(profile.display_name(), "anon@school.test");
}

#[test]
fn display_name_joins_names() {
    let profile: UserProfile =
        serde_json::from_str(r#"{"id":"u7","firstName":" Grace ","lastName":"Hopper"}"#).expect("profile");
    assert_eq!(profile.display_name(), "Grace Hopper");
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn decode_list_accepts_bare_array() {
    let courses: Vec<Course> = decode_list(r#"[{"id":"c1","title":"Algebra"}]"#).expect("list");
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Algebra");
}

#[test]
fn decode_list_accepts_wrapped_array() {
    let roles: Vec<RoleRecord> =
        decode_list(r#"{"count":2,"roles":[{"id":1,"name":"Admin"},{"id":2,"name":"Donor"}]}"#).expect("list");
    assert_eq!(roles.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(), ["Admin", "Donor"]);
}

#[test]
fn decode_list_rejects_object_without_array() {
    let err = decode_list::<Course>(r#"{"message":"ok"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_record_accepts_wrapped_user() {
    let profile: UserProfile = decode_record(r#"{"user":{"id":"u1","role":"Parent"}}"#).expect("record");
    assert_eq!(profile.role_kind(), Some(Role::Parent));
}

#[test]
fn decode_record_unwraps_user_without_id() {
    let profile: UserProfile = decode_record(r#"{"user":{"role":"Student"}}"#).expect("record");
    assert_eq!(profile.role_kind(), Some(Role::Student));
    assert!(profile.extra.is_empty());
}

#[test]
fn decode_record_rejects_null_wrapper() {
    assert!(matches!(decode_record::<UserProfile>(r#"{"user":null}"#), Err(ApiError::Decode(_))));
}

#[test]
fn decode_record_accepts_bare_record() {
    let course: Course = decode_record(r#"{"_id":"c9","name":"Biology","price":12.5}"#).expect("record");
    assert_eq!(course.id, "c9");
    assert_eq!(course.title, "Biology");
    assert_eq!(course.price, Some(12.5));
}

#[test]
fn transaction_reads_created_at_as_date() {
    let tx: Transaction =
        decode_record(r#"{"id":"t1","amount":25,"createdAt":"2024-09-01T10:00:00Z"}"#).expect("record");
    assert_eq!(tx.amount, 25.0);
    assert_eq!(tx.date.as_deref(), Some("2024-09-01T10:00:00Z"));
}

#[test]
fn registration_serializes_camel_case() {
    let body = Registration {
        first_name: "Ada".to_owned(),
        last_name: "L".to_owned(),
        email: "ada@school.test".to_owned(),
        password: "secret".to_owned(),
        role: "Student".to_owned(),
    };
    let value = serde_json::to_value(body).expect("json");
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["lastName"], "L");
}
