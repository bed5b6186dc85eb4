use crate::{
    auth::{generate_token, hash_password, verify_password, LoginRequest, SignupRequest, TokenResponse},
    error::AppError,
    models::User,
};
use actix_web::{post, web, HttpResponse, Responder};
use sqlx::PgPool;
use validator::Validate;

/// Register a new user
///
/// Creates a new user account with an empty task list. No token is issued at
/// signup; the client logs in afterwards.
#[post("/signup")]
pub async fn signup(
    pool: web::Data<PgPool>,
    signup_data: web::Json<SignupRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    signup_data.validate()?;

    // Check if username already exists
    let existing_user = User::find_by_username(&pool, &signup_data.username).await?;
    if existing_user.is_some() {
        return Err(AppError::BadRequest("Username already exists".into()));
    }

    // Hash password; a hashing failure aborts the signup with no partial user
    let password_hash = hash_password(&signup_data.password)?;

    // Insert new user
    let user_id = User::insert(&pool, &signup_data.username, &password_hash).await?;
    log::info!("Created user {} ({})", signup_data.username, user_id);

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "User created successfully"
    })))
}

/// Login user
///
/// Authenticates a user and returns a bearer token. An unknown username and a
/// wrong password produce the same rejection.
#[post("/login")]
pub async fn login(
    pool: web::Data<PgPool>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Get user from database
    let user = User::find_by_username(&pool, &login_data.username).await?;

    match user {
        Some(user) => {
            // Verify password
            if verify_password(&login_data.password, &user.password_hash)? {
                let token = generate_token(user.id)?;
                Ok(HttpResponse::Ok().json(TokenResponse { token }))
            } else {
                Err(AppError::Unauthorized("Invalid credentials".into()))
            }
        }
        None => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
