pub mod auth_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use auth_handler::{login, signup};
pub use health_handler::health_check;
pub use quiz_handler::{create_quiz, get_quiz_by_id, get_quizzes, update_quiz};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_quizzes)
        .service(get_quiz_by_id)
        .service(create_quiz)
        .service(update_quiz)
        .service(signup)
        .service(login);
}
