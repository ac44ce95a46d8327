use async_trait::async_trait;

use crate::{
    errors::AppResult,
    models::domain::{Quiz, User},
};

/// Persistence for quizzes and users. Implementations own id assignment and
/// report missing records as `AppError::NotFound`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizzoticRepository: Send + Sync {
    async fn check_db_connection(&self) -> AppResult<String>;
    async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn get_quizzes(&self) -> AppResult<Vec<Quiz>>;
    async fn get_quiz_by_id(&self, id: i64) -> AppResult<Quiz>;
    async fn update_quiz(&self, id: i64, quiz: Quiz) -> AppResult<()>;
    async fn find_user_by_email(&self, email: &str) -> AppResult<User>;
    async fn create_user(&self, email: &str, hashed_password: &str, name: &str)
        -> AppResult<User>;
}
