pub mod mongo_quizzotic_repository;
pub mod quizzotic_repository;

pub use mongo_quizzotic_repository::MongoQuizzoticRepository;
pub use quizzotic_repository::QuizzoticRepository;

#[cfg(test)]
pub use quizzotic_repository::MockQuizzoticRepository;
