mod common;

use common::{bearer, client, login};
use rocket::http::{ContentType, Status};
use serde_json::Value;

#[test]
fn login_succeeds_for_the_individual_demo_user() {
    let client = client();
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"password123"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["user"]["userType"], "INDIVIDUAL");
    assert_eq!(body["data"]["user"]["accountType"], "SAVLO");
    assert!(body["data"]["accessToken"].is_string());
    assert!(body["data"]["refreshToken"].is_string());
}

#[test]
fn login_succeeds_for_the_business_demo_user() {
    let client = client();
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"business@example.com","password":"password123"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["user"]["userType"], "BUSINESS");
}

#[test]
fn login_fails_for_anything_else() {
    let client = client();
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"intruder@example.com","password":"password123"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid email or password");
}

#[test]
fn login_error_is_localized() {
    let client = client();
    let response = client
        .post("/api/v1/auth/login?locale=id")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"wrong"}"#)
        .dispatch();

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "Email atau kata sandi salah");
}

#[test]
fn me_requires_a_token() {
    let client = client();
    let response = client.get("/api/v1/auth/me").dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
fn me_returns_the_logged_in_profile() {
    let client = client();
    let token = login(&client, "user@example.com");

    let response = client
        .get("/api/v1/auth/me")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["fullName"], "John Doe");
    assert_eq!(body["data"]["phoneNumber"], "+6281234567890");
}

#[test]
fn refresh_token_issues_a_working_access_token() {
    let client = client();
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"user@example.com","password":"password123"}"#)
        .dispatch();
    let body: Value = response.into_json().unwrap();
    let refresh = body["data"]["refreshToken"].as_str().unwrap();

    let response = client
        .post("/api/v1/auth/refresh")
        .header(ContentType::JSON)
        .body(format!(r#"{{"refresh_token":"{refresh}"}}"#))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    let access = body["data"]["accessToken"].as_str().unwrap();

    let response = client
        .get("/api/v1/auth/me")
        .header(bearer(access))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}

fn register_body(password: &str, confirm: &str) -> String {
    format!(
        r#"{{
            "fullName": "New User",
            "email": "new@example.com",
            "phoneNumber": "+6281234567892",
            "userType": "INDIVIDUAL",
            "accountType": "SAVLO",
            "password": "{password}",
            "confirmPassword": "{confirm}"
        }}"#
    )
}

#[test]
fn registration_rejects_a_short_password() {
    let client = client();
    // Six characters, matching confirmation
    let response = client
        .post("/api/v1/auth/register")
        .header(ContentType::JSON)
        .body(register_body("short1", "short1"))
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "Password must be at least 8 characters");
}

#[test]
fn registration_rejects_mismatched_passwords() {
    let client = client();
    let response = client
        .post("/api/v1/auth/register")
        .header(ContentType::JSON)
        .body(register_body("password123", "password124"))
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "Passwords do not match");
}

#[test]
fn registration_accepts_valid_input() {
    let client = client();
    let response = client
        .post("/api/v1/auth/register")
        .header(ContentType::JSON)
        .body(register_body("password123", "password123"))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["success"], true);

    // The user table is fixed; the new account cannot actually sign in.
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(r#"{"email":"new@example.com","password":"password123"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);
}

#[test]
fn logout_acknowledges_and_leaves_the_token_usable() {
    let client = client();
    let token = login(&client, "user@example.com");

    let response = client
        .post("/api/v1/auth/logout")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
}
