pub mod quiz;
pub mod user;
pub use quiz::{Choice, Question, Quiz};
pub use user::User;
