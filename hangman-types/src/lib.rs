pub mod errors;
pub mod game;
pub mod player;
pub mod word;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use player::*;
pub use word::*;

pub type UserId = uuid::Uuid;
pub type WordId = uuid::Uuid;
