use std::sync::Arc;

use crate::{
    auth::{JwtService, PasswordHasher},
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::QuizzoticRepository,
};

/// Mediates between the HTTP layer and the repository.
///
/// Holds no per-request state; one instance is shared by every worker.
pub struct QuizzoticService {
    repository: Arc<dyn QuizzoticRepository>,
    jwt_service: JwtService,
    password_hasher: PasswordHasher,
}

impl QuizzoticService {
    pub fn new(
        repository: Arc<dyn QuizzoticRepository>,
        jwt_service: JwtService,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            repository,
            jwt_service,
            password_hasher,
        }
    }

    pub async fn health_check(&self) -> AppResult<String> {
        self.repository.check_db_connection().await
    }

    /// Stored as given; shape checks belong to the caller.
    pub async fn create_quiz(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.repository.create_quiz(quiz).await
    }

    pub async fn get_quizzes(&self) -> AppResult<Vec<Quiz>> {
        let mut quizzes = self.repository.get_quizzes().await?;
        for quiz in &mut quizzes {
            quiz.resolve_answer_ids();
        }

        Ok(quizzes)
    }

    pub async fn get_quiz_by_id(&self, id: i64) -> AppResult<Quiz> {
        let mut quiz = self.repository.get_quiz_by_id(id).await?;
        quiz.resolve_answer_ids();

        Ok(quiz)
    }

    /// Answer ids are not resolved here; callers send the full quiz.
    pub async fn update_quiz(&self, id: i64, quiz: Quiz) -> AppResult<()> {
        self.repository.update_quiz(id, quiz).await
    }

    /// Registers a user and returns a session token for them.
    pub async fn signup(&self, email: &str, password: &str, name: &str) -> AppResult<String> {
        match self.repository.find_user_by_email(email).await {
            Ok(_) => {
                log::warn!("Signup rejected, email already registered");
                return Err(AppError::EmailInUse);
            }
            Err(e) => log::debug!("No existing user for signup email: {}", e),
        }

        let hashed_password = self.password_hasher.hash(password).await?;
        let user = self
            .repository
            .create_user(email, &hashed_password, name)
            .await?;

        let token = self.generate_jwt(&user)?;
        log::info!("User {} signed up", user.id);

        Ok(token)
    }

    /// Checks credentials and returns the stored user with a fresh token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<(User, String)> {
        let user = self.repository.find_user_by_email(email).await?;

        if !self.password_hasher.verify(password, &user.password).await? {
            log::warn!("Login failed for user {}", user.id);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.generate_jwt(&user)?;
        log::info!("User {} logged in", user.id);

        Ok((user, token))
    }

    pub fn generate_jwt(&self, user: &User) -> AppResult<String> {
        self.jwt_service.create_token(user)
    }

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use secrecy::SecretString;

    use super::*;
    use crate::{
        auth::password::MIN_COST,
        models::domain::{Choice, Question},
        repositories::MockQuizzoticRepository,
    };

    fn service_with(repository: MockQuizzoticRepository) -> QuizzoticService {
        let jwt_service =
            JwtService::new(&SecretString::from("service_test_secret".to_string()), 72).unwrap();
        QuizzoticService::new(
            Arc::new(repository),
            jwt_service,
            PasswordHasher::new(MIN_COST).unwrap(),
        )
    }

    fn stored_quiz(id: i64) -> Quiz {
        let mut quiz = Quiz::new(
            "Geography",
            vec![
                Question::new(
                    "Capital of France?",
                    "Paris",
                    vec![Choice::new(1, "Paris"), Choice::new(2, "Rome")],
                ),
                Question::new(
                    "Pick yes",
                    "yes",
                    vec![Choice::new(3, "yes"), Choice::new(4, "yes")],
                ),
                Question::new("Capital of Peru?", "Lima", vec![Choice::new(5, "lima")]),
            ],
        );
        quiz.id = id;
        quiz
    }

    fn stored_user(password: &str) -> User {
        let hash = bcrypt::hash(password, MIN_COST).unwrap();
        User::new(11, "ann@example.com", &hash, "Ann")
    }

    #[actix_web::test]
    async fn test_health_check_delegates() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_check_db_connection()
            .times(1)
            .returning(|| Ok("ok".to_string()));

        assert_eq!(service_with(repo).health_check().await.unwrap(), "ok");
    }

    #[actix_web::test]
    async fn test_health_check_surfaces_storage_failure() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_check_db_connection()
            .returning(|| Err(AppError::DatabaseError("unreachable".to_string())));

        let result = service_with(repo).health_check().await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_create_quiz_passes_quiz_through() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_create_quiz()
            .withf(|quiz: &Quiz| quiz.title == "Geography" && quiz.questions.len() == 3)
            .times(1)
            .returning(|quiz| Ok(quiz));

        let created = service_with(repo).create_quiz(stored_quiz(0)).await.unwrap();
        assert_eq!(created, stored_quiz(0));
    }

    #[actix_web::test]
    async fn test_get_quizzes_resolves_answer_ids() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_get_quizzes()
            .returning(|| Ok(vec![stored_quiz(1), stored_quiz(2)]));

        let quizzes = service_with(repo).get_quizzes().await.unwrap();

        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].id, 1);
        assert_eq!(quizzes[1].id, 2);
        for quiz in &quizzes {
            let ids: Vec<i64> = quiz.questions.iter().map(|q| q.answer_id).collect();
            assert_eq!(ids, vec![1, 4, 0]);
        }
    }

    #[actix_web::test]
    async fn test_get_quizzes_propagates_error() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_get_quizzes()
            .returning(|| Err(AppError::DatabaseError("read failed".to_string())));

        let result = service_with(repo).get_quizzes().await;
        assert!(matches!(result, Err(AppError::DatabaseError(msg)) if msg == "read failed"));
    }

    #[actix_web::test]
    async fn test_get_quiz_by_id_resolves_answer_ids() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_get_quiz_by_id()
            .withf(|id: &i64| *id == 7)
            .returning(|id| Ok(stored_quiz(id)));

        let quiz = service_with(repo).get_quiz_by_id(7).await.unwrap();

        assert_eq!(quiz.id, 7);
        assert_eq!(quiz.questions[0].answer_id, 1);
        assert_eq!(quiz.questions[1].answer_id, 4);
        assert_eq!(quiz.questions[2].answer_id, 0);
    }

    #[actix_web::test]
    async fn test_get_quiz_by_id_not_found_is_unchanged() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_get_quiz_by_id()
            .returning(|id| Err(AppError::NotFound(format!("Quiz with id '{}' not found", id))));

        let result = service_with(repo).get_quiz_by_id(99).await;
        assert!(matches!(result, Err(AppError::NotFound(msg)) if msg.contains("99")));
    }

    #[actix_web::test]
    async fn test_update_quiz_does_not_resolve_answer_ids() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_update_quiz()
            .withf(|id: &i64, quiz: &Quiz| {
                *id == 3 && quiz.questions.iter().all(|q| q.answer_id == 0)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        service_with(repo).update_quiz(3, stored_quiz(3)).await.unwrap();
    }

    #[actix_web::test]
    async fn test_signup_existing_email_fails_without_creating() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .times(1)
            .returning(|_| Ok(stored_user("whatever")));
        repo.expect_create_user().times(0);

        let result = service_with(repo)
            .signup("ann@example.com", "secret", "Ann")
            .await;

        match result {
            Err(err) => {
                assert!(matches!(err, AppError::EmailInUse));
                assert_eq!(err.to_string(), "email already in use");
            }
            Ok(_) => panic!("Expected duplicate email to fail"),
        }
    }

    #[actix_web::test]
    async fn test_signup_stores_hash_and_returns_token() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .returning(|email| Err(AppError::NotFound(email.to_string())));
        repo.expect_create_user()
            .withf(|email: &str, hashed: &str, name: &str| {
                email == "ann@example.com"
                    && name == "Ann"
                    && hashed != "secret"
                    && bcrypt::verify("secret", hashed).unwrap_or(false)
            })
            .times(1)
            .returning(|email, hashed, name| Ok(User::new(21, email, hashed, name)));

        let service = service_with(repo);
        let token = service
            .signup("ann@example.com", "secret", "Ann")
            .await
            .unwrap();

        let claims = service.jwt_service().validate_token(&token).unwrap();
        assert_eq!(claims.user_id, 21);
    }

    #[actix_web::test]
    async fn test_signup_lookup_storage_error_still_creates_user() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .times(1)
            .returning(|_| Err(AppError::DatabaseError("lookup timed out".to_string())));
        repo.expect_create_user()
            .withf(|email: &str, _hashed: &str, name: &str| {
                email == "ann@example.com" && name == "Ann"
            })
            .times(1)
            .returning(|email, hashed, name| Ok(User::new(31, email, hashed, name)));

        let service = service_with(repo);
        let token = service
            .signup("ann@example.com", "secret", "Ann")
            .await
            .unwrap();

        assert_eq!(service.jwt_service().validate_token(&token).unwrap().user_id, 31);
    }

    #[actix_web::test]
    async fn test_signup_create_failure_is_unchanged() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .returning(|email| Err(AppError::NotFound(email.to_string())));
        repo.expect_create_user()
            .returning(|_, _, _| Err(AppError::DatabaseError("duplicate key".to_string())));

        let result = service_with(repo)
            .signup("ann@example.com", "secret", "Ann")
            .await;
        assert!(matches!(result, Err(AppError::DatabaseError(msg)) if msg == "duplicate key"));
    }

    #[actix_web::test]
    async fn test_login_success_returns_user_and_token() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .withf(|email: &str| email == "ann@example.com")
            .returning(|_| Ok(stored_user("secret")));

        let service = service_with(repo);
        let (user, token) = service.login("ann@example.com", "secret").await.unwrap();

        assert_eq!(user.id, 11);
        assert_eq!(user.email, "ann@example.com");

        let claims = service.jwt_service().validate_token(&token).unwrap();
        let expected_exp = (Utc::now() + Duration::hours(72)).timestamp();
        assert_eq!(claims.user_id, 11);
        assert!((claims.exp - expected_exp).abs() <= 5);
    }

    #[actix_web::test]
    async fn test_login_wrong_password_is_invalid_credentials() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .returning(|_| Ok(stored_user("secret")));

        let result = service_with(repo).login("ann@example.com", "nope").await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_login_unknown_email_surfaces_lookup_failure() {
        let mut repo = MockQuizzoticRepository::new();
        repo.expect_find_user_by_email()
            .returning(|email| Err(AppError::NotFound(email.to_string())));

        let result = service_with(repo).login("ghost@example.com", "secret").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_generate_jwt_carries_user_id() {
        let service = service_with(MockQuizzoticRepository::new());
        let user = User::new(5, "bob@example.com", "hash", "Bob");

        let token = service.generate_jwt(&user).unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(service.jwt_service().validate_token(&token).unwrap().user_id, 5);
    }
}
