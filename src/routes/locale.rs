use rocket::serde::json::Json;

use crate::messages::{self, Locale};
use crate::utils::ApiResponse;
use crate::wizard::ProductType;

/// Bundled string resources for one locale. Static, synchronous lookup;
/// an unknown locale code is a routing-level 404.
#[get("/messages/<locale>")]
pub async fn get_messages(locale: Locale) -> Json<ApiResponse<serde_json::Value>> {
    let auth = messages::auth(locale);
    let dashboard = messages::dashboard(locale);

    let products: Vec<serde_json::Value> = ProductType::ALL
        .into_iter()
        .map(|product| {
            let config = product.config();
            serde_json::json!({
                "product": product,
                "title": config.title,
                "subtitle": config.subtitle,
                "steps": config.steps,
                "description": messages::product_description(product, locale),
            })
        })
        .collect();

    Json(ApiResponse::success(serde_json::json!({
        "locale": locale,
        "auth": {
            "loginError": auth.login_error,
            "passwordMismatch": auth.password_mismatch,
            "passwordTooShort": auth.password_too_short,
            "registrationSuccess": auth.registration_success,
        },
        "dashboard": {
            "title": dashboard.title,
            "welcome": dashboard.welcome,
            "startApplication": dashboard.start_application,
            "navigation": {
                "previous": dashboard.previous,
                "next": dashboard.next,
            },
            "review": { "submit": dashboard.submit },
            "gdriveHint": dashboard.gdrive_hint,
        },
        "products": products,
    })))
}
