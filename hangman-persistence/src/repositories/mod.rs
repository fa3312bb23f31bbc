pub mod game_repository;
pub mod user_repository;
pub mod word_repository;

pub use game_repository::GameRepository;
pub use user_repository::{CredentialCheck, UserRepository};
pub use word_repository::WordRepository;
