use futures::executor::block_on;

use super::*;
use crate::net::fake::{FAKE_BASE_URL, FakeTransport, fake_client};
use crate::net::types::{Course, NewCourse, ProfileUpdate, RoleRecord, Transaction};

#[test]
fn resource_endpoint_formats_expected_path() {
    assert_eq!(resource_endpoint::<Course>("c1"), "/courses/c1");
    assert_eq!(resource_endpoint::<UserProfile>("u9"), "/users/u9");
    assert_eq!(resource_endpoint::<RoleRecord>("r2"), "/roles/r2");
    assert_eq!(resource_endpoint::<Transaction>("t3"), "/transactions/t3");
}

#[test]
fn login_posts_credentials() {
    let client = fake_client(FakeTransport::new().respond(Method::Post, "/login", 200, r#"{"message":"ok"}"#));
    let credentials = Credentials { email: "ada@school.test".to_owned(), password: "pw".to_owned() };
    block_on(login(&client, &credentials)).expect("login");

    let calls = client.transport().calls();
    let body: serde_json::Value = serde_json::from_str(calls[0].body.as_deref().unwrap_or("")).expect("json");
    assert_eq!(body, serde_json::json!({ "email": "ada@school.test", "password": "pw" }));
}

#[test]
fn login_failure_surfaces_server_message() {
    let client = fake_client(FakeTransport::new().respond(
        Method::Post,
        "/login",
        401,
        r#"{"message":"Incorrect password"}"#,
    ));
    let credentials = Credentials { email: "ada@school.test".to_owned(), password: "nope".to_owned() };
    let err = block_on(login(&client, &credentials)).unwrap_err();
    assert_eq!(err.user_message(), "Incorrect password");
}

#[test]
fn fetch_profile_unwraps_user_envelope() {
    let client = fake_client(FakeTransport::new().respond(
        Method::Get,
        "/profile",
        200,
        r#"{"user":{"id":"u1","firstName":"Ada","role":"Instructor"}}"#,
    ));
    let profile = block_on(fetch_profile(&client)).expect("profile");
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.role.as_deref(), Some("Instructor"));
}

#[test]
fn logout_posts_to_logout() {
    let client = fake_client(FakeTransport::new().respond(Method::Post, "/logout", 200, "{}"));
    block_on(logout(&client)).expect("logout");
    assert!(client.transport().called(Method::Post, "/logout"));
}

#[test]
fn list_resources_reads_wrapped_collection() {
    let client = fake_client(FakeTransport::new().respond(
        Method::Get,
        "/courses",
        200,
        r#"{"courses":[{"id":"c1","title":"Algebra"},{"id":"c2","title":"Chemistry"}]}"#,
    ));
    let courses: Vec<Course> = block_on(list_resources(&client)).expect("courses");
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].id(), "c2");
}

#[test]
fn fetch_resource_hits_detail_endpoint() {
    let client = fake_client(FakeTransport::new().respond(
        Method::Get,
        "/courses/c7",
        200,
        r#"{"course":{"id":"c7","title":"Physics","description":"Mechanics"}}"#,
    ));
    let course: Course = block_on(fetch_resource(&client, "c7")).expect("course");
    assert_eq!(course.description.as_deref(), Some("Mechanics"));
}

#[test]
fn create_update_delete_use_expected_methods() {
    let client = fake_client(
        FakeTransport::new()
            .respond(Method::Post, "/courses", 201, "{}")
            .respond(Method::Put, "/users/u1", 200, "{}")
            .respond(Method::Delete, "/roles/r1", 204, ""),
    );
    let course = NewCourse { title: "Art".to_owned(), description: "Drawing".to_owned() };
    block_on(create_resource::<Course, _, _>(&client, &course)).expect("create");
    let update = ProfileUpdate { first_name: "Ada".to_owned(), last_name: "King".to_owned() };
    block_on(update_resource::<UserProfile, _, _>(&client, "u1", &update)).expect("update");
    block_on(delete_resource::<RoleRecord, _>(&client, "r1")).expect("delete");

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].url, format!("{FAKE_BASE_URL}/courses"));
    assert_eq!(calls[1].method, Method::Put);
    assert_eq!(calls[2].method, Method::Delete);
    assert_eq!(calls[2].body, None);
}

#[test]
fn delete_failure_is_normalized() {
    let client = fake_client(FakeTransport::new().respond(
        Method::Delete,
        "/users/u1",
        403,
        r#"{"message":"Not allowed"}"#,
    ));
    let err = block_on(delete_resource::<UserProfile, _>(&client, "u1")).unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.user_message(), "Not allowed");
}
