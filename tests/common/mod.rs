use rocket::http::{ContentType, Header, Status};
use rocket::local::blocking::Client;
use serde_json::Value;

pub fn client() -> Client {
    Client::tracked(savlo_server::build()).expect("valid rocket instance")
}

pub fn login(client: &Client, email: &str) -> String {
    let response = client
        .post("/api/v1/auth/login")
        .header(ContentType::JSON)
        .body(format!(
            r#"{{"email":"{email}","password":"password123"}}"#
        ))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().expect("json body");
    body["data"]["accessToken"]
        .as_str()
        .expect("access token")
        .to_string()
}

pub fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}
