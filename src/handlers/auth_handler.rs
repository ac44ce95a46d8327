use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, SignupRequest},
        response::{LoginResponse, SignupResponse},
    },
};

#[post("/api/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let token = state
        .quizzotic_service
        .signup(&request.email, &request.password, &request.name)
        .await?;

    Ok(HttpResponse::Created().json(SignupResponse { token }))
}

#[post("/api/login")]
pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let (user, token) = state
        .quizzotic_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        user: user.into(),
        token,
    }))
}
