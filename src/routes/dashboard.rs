use rocket::serde::json::Json;
use rocket::State;

use crate::guards::AuthGuard;
use crate::messages::{self, Locale};
use crate::models::{sample_applications, UserResponse};
use crate::store::AuthStore;
use crate::utils::{ApiResponse, ApiError};
use crate::wizard::ProductType;

/// Dashboard view: welcome line, the four product launcher cards, and the
/// static demo application records grouped into the three tabs.
#[get("/dashboard?<locale>")]
pub async fn get_dashboard(
    auth: AuthGuard,
    auth_store: &State<AuthStore>,
    locale: Option<Locale>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let locale = locale.unwrap_or_default();
    let t = messages::dashboard(locale);

    let user = auth_store
        .find_by_id(auth.user_id)
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    let products: Vec<serde_json::Value> = ProductType::ALL
        .into_iter()
        .map(|product| {
            serde_json::json!({
                "product": product,
                "slug": product.slug(),
                "title": product.config().title,
                "description": messages::product_description(product, locale),
            })
        })
        .collect();

    let applications = sample_applications(user.id);
    let drafts: Vec<_> = applications.iter().filter(|a| a.status.tab() == "drafts").collect();
    let under_review: Vec<_> = applications.iter().filter(|a| a.status.tab() == "under_review").collect();
    let reviewed: Vec<_> = applications.iter().filter(|a| a.status.tab() == "reviewed").collect();

    Ok(Json(ApiResponse::success(serde_json::json!({
        "title": t.title,
        "welcome": t.welcome.replace("{name}", &user.full_name),
        "user": UserResponse::from(user),
        "products": products,
        "myApplications": {
            "drafts": drafts,
            "underReview": under_review,
            "reviewed": reviewed,
        },
    }))))
}
