use crate::{
    auth::{hash_password, verify_password, LoginRequest, LoginResponse, SignupRequest},
    error::AppError,
    store::Store,
};
use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Register a new account.
///
/// Requires username, password, and email, all non-empty. The email must
/// not belong to an existing account. The password is stored only as a
/// bcrypt hash, and the response carries no credential material.
#[post("/signup")]
pub async fn signup(
    store: web::Data<Store>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    signup_data.validate()?;

    // Early exit on a known collision. The store's unique index on email
    // is the real guarantee against a concurrent signup racing this check.
    if store
        .find_account_by_email(&signup_data.email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateEmail);
    }

    let password_hash = hash_password(&signup_data.password)?;

    let account = store
        .insert_account(&signup_data.username, &password_hash, &signup_data.email)
        .await?;

    log::info!("account created: {}", account.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "User created successfully."
    })))
}

/// Log in with email and password.
///
/// On success, returns the account identifier the client uses as the task
/// owner reference on later requests. No session token, cookie, or expiry
/// is established. An unknown email and a wrong password produce the same
/// error body, so a caller cannot probe which emails are registered.
#[post("/login")]
pub async fn login(
    store: web::Data<Store>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    login_data.validate()?;

    let account = store
        .find_account_by_email(&login_data.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&login_data.password, &account.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "Login successful.".to_string(),
        user_id: account.id,
    }))
}

/// Log out.
///
/// A no-op acknowledgment: login creates no session state, so there is
/// nothing to invalidate. This is an inherited simplification of the API,
/// kept deliberately, not an oversight.
#[post("/logout")]
pub async fn logout() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Logout successful."
    }))
}
