use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::{domain::Quiz, dto::response::MessageResponse},
};

#[get("/api/quizzes")]
pub async fn get_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quizzotic_service.get_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/api/quizzes/{id}")]
pub async fn get_quiz_by_id(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quizzotic_service.get_quiz_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/api/quizzes")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<Quiz>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quizzotic_service.create_quiz(request.into_inner()).await?;
    log::info!("Quiz {} created by user {}", quiz.id, auth.0.user_id);
    Ok(HttpResponse::Created().json(quiz))
}

#[put("/api/quizzes/{id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<Quiz>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    state
        .quizzotic_service
        .update_quiz(id, request.into_inner())
        .await?;

    log::info!("Quiz {} updated by user {}", id, auth.0.user_id);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("quiz {} updated", id),
    }))
}
