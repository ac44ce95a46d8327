#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::password::MIN_COST,
        config::Config,
        models::domain::{Choice, Question, Quiz, User},
        repositories::MockQuizzoticRepository,
    };

    /// A quiz as the repository returns it: ids assigned, answers unresolved.
    pub fn stored_quiz(id: i64) -> Quiz {
        let mut quiz = Quiz::new(
            "Geography",
            vec![Question::new(
                "Capital of France?",
                "Paris",
                vec![Choice::new(1, "Lyon"), Choice::new(2, "Paris")],
            )],
        );
        quiz.id = id;
        quiz
    }

    /// A user whose stored hash matches `password`.
    pub fn stored_user(id: i64, email: &str, password: &str) -> User {
        let hash = bcrypt::hash(password, MIN_COST).expect("min cost hash");
        User::new(id, email, &hash, "Test User")
    }

    pub fn test_app_state(repository: MockQuizzoticRepository) -> AppState {
        AppState::with_repository(Config::test_config(), Arc::new(repository))
            .expect("test config is valid")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_stored_quiz() {
        let quiz = stored_quiz(4);
        assert_eq!(quiz.id, 4);
        assert_eq!(quiz.questions[0].answer_id, 0);
    }

    #[test]
    fn test_fixtures_stored_user_hash_matches() {
        let user = stored_user(1, "ann@example.com", "secret");
        assert_ne!(user.password, "secret");
        assert!(bcrypt::verify("secret", &user.password).unwrap());
    }
}
