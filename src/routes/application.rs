use indexmap::IndexMap;
use rocket::serde::json::Json;
use rocket::State;
use rand::Rng;

use crate::guards::AuthGuard;
use crate::store::DraftStore;
use crate::utils::{ApiResponse, ApiError};
use crate::wizard::{Draft, DraftError, ProductType};

fn draft_view(draft: &Draft) -> serde_json::Value {
    let config = draft.config();
    serde_json::json!({
        "product": draft.product,
        "slug": draft.product.slug(),
        "title": config.title,
        "subtitle": config.subtitle,
        "currentStep": draft.current_step,
        "totalSteps": config.total_steps(),
        "steps": config.steps,
        "fields": config.fields,
        "requiredDocuments": config.documents,
        "formData": draft.form_data,
        "documents": draft.documents,
        "updatedAt": draft.updated_at,
    })
}

fn no_draft(product: ProductType) -> ApiError {
    ApiError::not_found(format!(
        "No {} application in progress",
        product.slug()
    ))
}

/// --------------------
/// Start / resume draft
/// --------------------
#[post("/applications/<product>")]
pub async fn start_application(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Json<ApiResponse<serde_json::Value>> {
    let draft = drafts.open(auth.user_id, product);
    Json(ApiResponse::success(draft_view(&draft)))
}

#[get("/applications/<product>")]
pub async fn get_application(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let draft = drafts
        .get(auth.user_id, product)
        .ok_or_else(|| no_draft(product))?;

    Ok(Json(ApiResponse::success(draft_view(&draft))))
}

/// --------------------
/// Step transitions
/// --------------------
/// Clamped at both ends: calling past a boundary succeeds without moving.
#[post("/applications/<product>/next")]
pub async fn next_step(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let draft = drafts
        .modify(auth.user_id, product, |d| {
            d.go_next();
            d.clone()
        })
        .ok_or_else(|| no_draft(product))?;

    Ok(Json(ApiResponse::success(draft_view(&draft))))
}

#[post("/applications/<product>/previous")]
pub async fn previous_step(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let draft = drafts
        .modify(auth.user_id, product, |d| {
            d.go_previous();
            d.clone()
        })
        .ok_or_else(|| no_draft(product))?;

    Ok(Json(ApiResponse::success(draft_view(&draft))))
}

/// --------------------
/// Field edits
/// --------------------
/// Merges the given fields into the draft's form record, in body order.
#[patch("/applications/<product>/fields", data = "<dto>")]
pub async fn update_fields(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
    dto: Json<IndexMap<String, String>>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let fields = dto.into_inner();

    let result = drafts
        .modify(auth.user_id, product, |d| {
            for (name, value) in fields {
                d.set_field(&name, value)?;
            }
            Ok::<Draft, DraftError>(d.clone())
        })
        .ok_or_else(|| no_draft(product))?;

    let draft = result.map_err(|e| match e {
        DraftError::UnknownField(name) => ApiError::unprocessable(format!(
            "Unknown field '{}' for {}",
            name,
            product.slug()
        )),
        _ => ApiError::internal_error("Draft update failed"),
    })?;

    Ok(Json(ApiResponse::success(draft_view(&draft))))
}

/// --------------------
/// Review
/// --------------------
#[get("/applications/<product>/review")]
pub async fn get_review(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let draft = drafts
        .get(auth.user_id, product)
        .ok_or_else(|| no_draft(product))?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "product": draft.product,
        "groups": draft.summary(),
        "documents": draft.documents,
    }))))
}

/// --------------------
/// Submit (simulated)
/// --------------------
/// Terminal stub: acknowledges with a fake reference number and leaves the
/// draft untouched. A real submission endpoint sits outside this prototype.
#[post("/applications/<product>/submit")]
pub async fn submit_application(
    auth: AuthGuard,
    drafts: &State<DraftStore>,
    product: ProductType,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let result = drafts
        .modify(auth.user_id, product, |d| d.submit())
        .ok_or_else(|| no_draft(product))?;

    result.map_err(|_| {
        ApiError::unprocessable("Submit is only available on the review step")
    })?;

    let reference = format!("#{}", rand::thread_rng().gen_range(100..1000));
    info!("{} application submitted (simulated) as {}", product.slug(), reference);

    Ok(Json(ApiResponse::success_with_message(
        "Application submitted".to_string(),
        serde_json::json!({
            "product": product,
            "reference": reference,
        }),
    )))
}
