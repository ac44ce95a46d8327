use std::sync::Arc;

use crate::{
    auth::{JwtService, PasswordHasher},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizzoticRepository, QuizzoticRepository},
    services::QuizzoticService,
};

#[derive(Clone)]
pub struct AppState {
    pub quizzotic_service: Arc<QuizzoticService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let repository = Arc::new(MongoQuizzoticRepository::new(&db));
        repository.ensure_indexes().await?;

        Self::with_repository(config, repository)
    }

    pub fn with_repository(
        config: Config,
        repository: Arc<dyn QuizzoticRepository>,
    ) -> AppResult<Self> {
        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours)?;
        let password_hasher = PasswordHasher::new(config.bcrypt_cost)?;
        let quizzotic_service = Arc::new(QuizzoticService::new(
            repository,
            jwt_service,
            password_hasher,
        ));

        Ok(Self {
            quizzotic_service,
            config: Arc::new(config),
        })
    }

    pub fn jwt_service(&self) -> JwtService {
        self.quizzotic_service.jwt_service().clone()
    }
}
