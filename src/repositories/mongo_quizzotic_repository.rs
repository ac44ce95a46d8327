use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::QuizzoticRepository,
};

const QUIZ_SEQUENCE: &str = "quizzes";
const CHOICE_SEQUENCE: &str = "choices";
const USER_SEQUENCE: &str = "users";

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    name: String,
    seq: i64,
}

pub struct MongoQuizzoticRepository {
    db: Database,
    quizzes: Collection<Quiz>,
    users: Collection<User>,
    counters: Collection<Counter>,
}

impl MongoQuizzoticRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            db: db.clone(),
            quizzes: db.get_collection("quizzes"),
            users: db.get_collection("users"),
            counters: db.get_collection("counters"),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes and users collections");

        let quiz_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();
        self.quizzes.create_index(quiz_index).await?;

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();
        self.users.create_index(email_index).await?;

        log::info!("Successfully created indexes");
        Ok(())
    }

    async fn next_id(&self, sequence: &str) -> AppResult<i64> {
        self.reserve_ids(sequence, 1).await
    }

    /// Atomically advances the named sequence by `count` and returns the last
    /// id of the reserved block.
    async fn reserve_ids(&self, sequence: &str, count: i64) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(doc! { "_id": sequence }, doc! { "$inc": { "seq": count } })
            .with_options(options)
            .await?
            .ok_or_else(|| {
                AppError::DatabaseError(format!("Sequence '{}' was not created", sequence))
            })?;

        Ok(counter.seq)
    }
}

#[async_trait]
impl QuizzoticRepository for MongoQuizzoticRepository {
    async fn check_db_connection(&self) -> AppResult<String> {
        self.db.health_check().await
    }

    async fn create_quiz(&self, mut quiz: Quiz) -> AppResult<Quiz> {
        quiz.id = self.next_id(QUIZ_SEQUENCE).await?;

        let choice_count: i64 = quiz.questions.iter().map(|q| q.choices.len() as i64).sum();
        if choice_count > 0 {
            let last = self.reserve_ids(CHOICE_SEQUENCE, choice_count).await?;
            assign_choice_ids(&mut quiz, last - choice_count + 1);
        }

        self.quizzes.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn get_quizzes(&self) -> AppResult<Vec<Quiz>> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self.quizzes.find(doc! {}).with_options(find_options).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn get_quiz_by_id(&self, id: i64) -> AppResult<Quiz> {
        self.quizzes
            .find_one(doc! { "id": id })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    async fn update_quiz(&self, id: i64, mut quiz: Quiz) -> AppResult<()> {
        quiz.id = id;

        let result = self.quizzes.replace_one(doc! { "id": id }, &quiz).await?;
        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                id
            )));
        }

        Ok(())
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<User> {
        self.users
            .find_one(doc! { "email": email })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with email '{}' not found", email)))
    }

    async fn create_user(
        &self,
        email: &str,
        hashed_password: &str,
        name: &str,
    ) -> AppResult<User> {
        let id = self.next_id(USER_SEQUENCE).await?;
        let user = User::new(id, email, hashed_password, name);

        self.users.insert_one(&user).await?;
        Ok(user)
    }
}

/// Numbers every choice in question order, starting at `first`.
fn assign_choice_ids(quiz: &mut Quiz, first: i64) {
    let choices = quiz.questions.iter_mut().flat_map(|q| q.choices.iter_mut());
    for (id, choice) in (first..).zip(choices) {
        choice.id = id;
    }
}
