use rocket::serde::json::Json;
use rocket::State;
use std::time::Duration;

use crate::config::Config;
use crate::guards::AuthGuard;
use crate::messages::{self, Locale};
use crate::models::{LoginDto, RegisterDto, UserResponse};
use crate::services::JwtService;
use crate::store::AuthStore;
use crate::utils::{validate_email, validate_phone, ApiResponse, ApiError};

const MIN_PASSWORD_LEN: usize = 8;

/// --------------------
/// Login
/// --------------------
#[post("/auth/login?<locale>", data = "<dto>")]
pub async fn login(
    auth_store: &State<AuthStore>,
    locale: Option<Locale>,
    dto: Json<LoginDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let locale = locale.unwrap_or_default();

    let user = auth_store
        .login(&dto.email, &dto.password)
        .await
        .ok_or_else(|| {
            warn!("login rejected for {}", dto.email);
            ApiError::unauthorized(messages::auth(locale).login_error)
        })?;

    let access_token = JwtService::generate_access_token(&user.id, &user.email)
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    let refresh_token = JwtService::generate_refresh_token(&user.id, &user.email)
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "message": "Login successful",
        "user": UserResponse::from(user),
        "accessToken": access_token,
        "refreshToken": refresh_token
    }))))
}

/// --------------------
/// Register (simulated)
/// --------------------
/// Validates like the prototype's registration form, then simulates the
/// submission delay. No account is created; the demo user table is fixed.
#[post("/auth/register?<locale>", data = "<dto>")]
pub async fn register(
    locale: Option<Locale>,
    dto: Json<RegisterDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let locale = locale.unwrap_or_default();
    let t = messages::auth(locale);

    if dto.password != dto.confirm_password {
        return Err(ApiError::unprocessable(t.password_mismatch));
    }
    if dto.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::unprocessable(t.password_too_short));
    }
    if !validate_email(&dto.email) {
        return Err(ApiError::bad_request("Invalid email"));
    }
    if !validate_phone(&dto.phone_number) {
        return Err(ApiError::bad_request("Invalid phone number"));
    }

    tokio::time::sleep(Duration::from_millis(Config::register_delay_ms())).await;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "message": t.registration_success,
        "email": dto.email,
    }))))
}

/// --------------------
/// Silent Refresh Token
/// --------------------
#[derive(serde::Deserialize)]
pub struct RefreshTokenDto {
    pub refresh_token: String,
}

#[post("/auth/refresh", data = "<dto>")]
pub async fn refresh_token(
    dto: Json<RefreshTokenDto>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let claims = JwtService::verify_token(&dto.refresh_token, true)
        .map_err(|_| ApiError::unauthorized("Invalid refresh token"))?;

    let user_id = uuid::Uuid::parse_str(&claims.sub)
        .map_err(|_| ApiError::unauthorized("Invalid user id in token"))?;

    let access = JwtService::generate_access_token(&user_id, &claims.email)
        .map_err(|e| ApiError::internal_error(e.to_string()))?;

    Ok(Json(ApiResponse::success(serde_json::json!({
        "accessToken": access
    }))))
}

/// --------------------
/// Current user
/// --------------------
#[get("/auth/me")]
pub async fn me(
    auth: AuthGuard,
    auth_store: &State<AuthStore>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = auth_store
        .find_by_id(auth.user_id)
        .ok_or_else(|| ApiError::unauthorized("Unknown user"))?;

    Ok(Json(ApiResponse::success(UserResponse::from(user))))
}

/// --------------------
/// Logout
/// --------------------
/// Tokens are stateless, so the session ends when the client discards
/// them; this endpoint exists for the flow's symmetry.
#[post("/auth/logout?<locale>")]
pub async fn logout(
    _auth: AuthGuard,
    locale: Option<Locale>,
) -> Json<ApiResponse<serde_json::Value>> {
    let t = messages::auth(locale.unwrap_or_default());
    Json(ApiResponse::success(serde_json::json!({
        "message": t.logout_success
    })))
}
