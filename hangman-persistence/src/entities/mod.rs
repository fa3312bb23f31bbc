pub mod prelude;

pub mod games;
pub mod users;
pub mod words;
