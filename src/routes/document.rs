use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;
use std::path::Path;
use rocket_okapi::okapi::schemars;
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::Deserialize;

use crate::guards::AuthGuard;
use crate::messages::{self, Locale};
use crate::store::DraftStore;
use crate::utils::{ApiResponse, ApiError};
use crate::wizard::{
    extension_from_content_type, is_allowed_extension, DocumentMethod, DraftError, FileRef,
    ProductType,
};

fn get_extension_from_filename(name: &str) -> Option<String> {
    if let Some(ext) = Path::new(name).extension() {
        return ext.to_str().map(|s| s.to_lowercase());
    }

    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() >= 2 {
        let last = parts.last()?;
        return Some(last.to_lowercase());
    }

    None
}

fn no_draft(product: ProductType) -> ApiError {
    ApiError::not_found(format!(
        "No {} application in progress",
        product.slug()
    ))
}

/// --------------------
/// Method toggle
/// --------------------
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DocumentMethodDto {
    pub method: DocumentMethod,
}

/// Pure UI-state toggle: previously entered data for the other method is
/// kept, exactly as the prototype keeps it.
#[put("/applications/<product>/documents/method", data = "<dto>")]
pub async fn set_document_method(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
    dto: Json<DocumentMethodDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let documents = drafts
        .modify(auth.user_id, product, |d| {
            d.documents.set_method(dto.method);
            d.documents.clone()
        })
        .ok_or_else(|| no_draft(product))?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "documents": documents
    }))))
}

/// --------------------
/// GDrive link
/// --------------------
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GdriveUrlDto {
    pub url: String,
}

#[put("/applications/<product>/documents/gdrive-url?<locale>", data = "<dto>")]
pub async fn set_gdrive_url(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
    locale: Option<Locale>,
    dto: Json<GdriveUrlDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let t = messages::dashboard(locale.unwrap_or_default());

    let result = drafts
        .modify(auth.user_id, product, |d| {
            d.set_field("googleDriveUrl", dto.url.clone())
        })
        .ok_or_else(|| no_draft(product))?;

    result.map_err(|_| ApiError::internal_error("Draft update failed"))?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "googleDriveUrl": dto.url,
        "hint": t.gdrive_hint,
    }))))
}

/// --------------------
/// Manual upload
/// --------------------
/// Records an in-memory reference only. The extension check mirrors the
/// prototype's advisory `image/*,.pdf` input filter; bytes are discarded.
#[put("/applications/<product>/documents/<doc_id>", data = "<file>", rank = 2)]
pub async fn upload_document(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
    doc_id: &str,
    file: TempFile<'_>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let extension = file
        .name()
        .and_then(get_extension_from_filename)
        .or_else(|| {
            file.content_type()
                .and_then(|ct| extension_from_content_type(&ct.to_string()))
        })
        .ok_or_else(|| ApiError::bad_request("Cannot determine file type"))?;

    if !is_allowed_extension(&extension) {
        return Err(ApiError::unprocessable(format!(
            "File type '.{}' is not accepted; use an image or PDF",
            extension
        )));
    }

    let file_ref = FileRef {
        file_name: file
            .name()
            .map(|n| n.to_string())
            .unwrap_or_else(|| format!("document.{}", extension)),
        extension,
        size: file.len(),
    };

    let result = drafts
        .modify(auth.user_id, product, |d| {
            d.set_file(doc_id, Some(file_ref.clone()))
        })
        .ok_or_else(|| no_draft(product))?;

    map_document_error(result, product)?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "documentId": doc_id,
        "file": file_ref,
    }))))
}

#[delete("/applications/<product>/documents/<doc_id>")]
pub async fn remove_document(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
    doc_id: &str,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let result = drafts
        .modify(auth.user_id, product, |d| d.set_file(doc_id, None))
        .ok_or_else(|| no_draft(product))?;

    map_document_error(result, product)?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "documentId": doc_id,
        "file": serde_json::Value::Null,
    }))))
}

fn map_document_error(result: Result<(), DraftError>, product: ProductType) -> Result<(), ApiError> {
    result.map_err(|e| match e {
        DraftError::UnknownDocument(id) => ApiError::not_found(format!(
            "'{}' is not a required document for {}",
            id,
            product.slug()
        )),
        _ => ApiError::internal_error("Draft update failed"),
    })
}
