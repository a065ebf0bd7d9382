mod common;

use common::{bearer, client, login};
use rocket::http::{ContentType, Status};
use serde_json::Value;

#[test]
fn wizard_routes_require_authentication() {
    let client = client();
    let response = client
        .get("/api/v1/applications/bpkb-financing")
        .dispatch();
    assert_eq!(response.status(), Status::Unauthorized);

    let body: Value = response.into_json().unwrap();
    assert!(body.get("data").is_none());
}

#[test]
fn unknown_product_slug_is_not_found() {
    let client = client();
    let token = login(&client, "user@example.com");

    let response = client
        .post("/api/v1/applications/payday-loans")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn getting_a_draft_before_starting_is_not_found() {
    let client = client();
    let token = login(&client, "user@example.com");

    let response = client
        .get("/api/v1/applications/property-financing")
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn next_clamps_at_the_review_step() {
    let client = client();
    let token = login(&client, "user@example.com");

    client
        .post("/api/v1/applications/bpkb-financing")
        .header(bearer(&token))
        .dispatch();

    let mut last = Value::Null;
    for _ in 0..5 {
        let response = client
            .post("/api/v1/applications/bpkb-financing/next")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        last = response.into_json().unwrap();
    }
    assert_eq!(last["data"]["currentStep"], 3);
    assert_eq!(last["data"]["totalSteps"], 3);
}

#[test]
fn previous_clamps_at_step_one() {
    let client = client();
    let token = login(&client, "user@example.com");

    client
        .post("/api/v1/applications/bpkb-financing")
        .header(bearer(&token))
        .dispatch();

    let mut last = Value::Null;
    for _ in 0..5 {
        let response = client
            .post("/api/v1/applications/bpkb-financing/previous")
            .header(bearer(&token))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
        last = response.into_json().unwrap();
    }
    assert_eq!(last["data"]["currentStep"], 1);
}

#[test]
fn unknown_fields_are_rejected() {
    let client = client();
    let token = login(&client, "user@example.com");

    client
        .post("/api/v1/applications/ar-invoice-financing")
        .header(bearer(&token))
        .dispatch();

    let response = client
        .patch("/api/v1/applications/ar-invoice-financing/fields")
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(r#"{"namaLengkap":"John Doe"}"#)
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[test]
fn toggling_document_method_preserves_both_field_sets() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/bpkb-financing";

    client.post(base).header(bearer(&token)).dispatch();

    // GDrive mode: set the shared link
    client
        .put(format!("{base}/documents/gdrive-url"))
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(r#"{"url":"https://drive.google.com/drive/folders/abc"}"#)
        .dispatch();

    // Switch to manual and attach a file
    client
        .put(format!("{base}/documents/method"))
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(r#"{"method":"manual"}"#)
        .dispatch();
    let response = client
        .put(format!("{base}/documents/fotoKtp"))
        .header(bearer(&token))
        .header(ContentType::PNG)
        .body([0x89, 0x50, 0x4E, 0x47])
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // Switch back to GDrive: nothing is cleared
    client
        .put(format!("{base}/documents/method"))
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(r#"{"method":"gdrive"}"#)
        .dispatch();

    let response = client.get(base).header(bearer(&token)).dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(
        body["data"]["formData"]["googleDriveUrl"],
        "https://drive.google.com/drive/folders/abc"
    );
    assert_eq!(body["data"]["documents"]["method"], "gdrive");
    assert_eq!(
        body["data"]["documents"]["manual"]["fotoKtp"]["extension"],
        "png"
    );
}

#[test]
fn removing_a_document_clears_the_reference() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/property-financing";

    client.post(base).header(bearer(&token)).dispatch();
    client
        .put(format!("{base}/documents/fotoKtp"))
        .header(bearer(&token))
        .header(ContentType::PNG)
        .body([0x89, 0x50, 0x4E, 0x47])
        .dispatch();

    let response = client
        .delete(format!("{base}/documents/fotoKtp"))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let response = client.get(base).header(bearer(&token)).dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["documents"]["manual"]["fotoKtp"], Value::Null);
}

#[test]
fn uploads_outside_the_catalog_are_rejected() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/bpkb-financing";

    client.post(base).header(bearer(&token)).dispatch();
    let response = client
        .put(format!("{base}/documents/fotoSelfie"))
        .header(bearer(&token))
        .header(ContentType::PNG)
        .body([0x89, 0x50, 0x4E, 0x47])
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn uploads_with_undeterminable_type_are_rejected() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/bpkb-financing";

    client.post(base).header(bearer(&token)).dispatch();
    let response = client
        .put(format!("{base}/documents/fotoKtp"))
        .header(bearer(&token))
        .header(ContentType::Plain)
        .body("not an image")
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn submit_is_rejected_before_the_review_step() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/ap-invoice-financing";

    client.post(base).header(bearer(&token)).dispatch();
    let response = client
        .post(format!("{base}/submit"))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::UnprocessableEntity);
}

#[test]
fn bpkb_application_end_to_end() {
    let client = client();
    let token = login(&client, "user@example.com");
    let base = "/api/v1/applications/bpkb-financing";

    // Step 1: BPKB Info
    let response = client.post(base).header(bearer(&token)).dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["currentStep"], 1);
    assert_eq!(body["data"]["steps"][0], "BPKB Info");

    let response = client
        .patch(format!("{base}/fields"))
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(
            r#"{
                "namaLengkap": "John Doe",
                "noKtp": "3201012345678901",
                "noHp": "+6281234567890",
                "usiaKonsumen": "30",
                "jenisKendaraan": "Mobil",
                "merkKendaraan": "Toyota",
                "tipeKendaraan": "Avanza",
                "jumlahPinjaman": "50000000",
                "tenorPelunasan": "36"
            }"#,
        )
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // Step 2: Documents
    let response = client
        .post(format!("{base}/next"))
        .header(bearer(&token))
        .dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["currentStep"], 2);
    assert_eq!(body["data"]["steps"][1], "Documents");

    client
        .put(format!("{base}/documents/method"))
        .header(bearer(&token))
        .header(ContentType::JSON)
        .body(r#"{"method":"manual"}"#)
        .dispatch();
    let response = client
        .put(format!("{base}/documents/fotoKtp"))
        .header(bearer(&token))
        .header(ContentType::PNG)
        .body([0x89, 0x50, 0x4E, 0x47])
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    // Step 3: Review
    let response = client
        .post(format!("{base}/next"))
        .header(bearer(&token))
        .dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["currentStep"], 3);

    let response = client
        .get(format!("{base}/review"))
        .header(bearer(&token))
        .dispatch();
    let body: Value = response.into_json().unwrap();
    let groups = body["data"]["groups"].as_array().unwrap();
    assert_eq!(groups[0]["title"], "Data Diri");
    assert_eq!(groups[0]["fields"][0]["value"], "John Doe");
    assert_eq!(groups[0]["fields"][1]["value"], "3201012345678901");
    assert_eq!(groups[1]["title"], "Data Kendaraan");
    assert_eq!(groups[1]["fields"][1]["value"], "Toyota");

    // Submit: simulated, the draft is left as-is
    let response = client
        .post(format!("{base}/submit"))
        .header(bearer(&token))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body: Value = response.into_json().unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Application submitted");
    assert!(body["data"]["reference"].as_str().unwrap().starts_with('#'));

    let response = client.get(base).header(bearer(&token)).dispatch();
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["data"]["currentStep"], 3);
}
