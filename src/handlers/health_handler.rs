use actix_web::{get, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::HealthResponse};

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let status = state.quizzotic_service.health_check().await?;
    Ok(HttpResponse::Ok().json(HealthResponse { status }))
}
