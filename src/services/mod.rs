pub mod quizzotic_service;

pub use quizzotic_service::QuizzoticService;
