pub mod accounts;
pub mod controller;
pub mod render;
pub mod rules;
pub mod session;
pub mod store;
pub mod word_list;
pub mod word_selector;

// Re-export main components
pub use accounts::*;
pub use controller::*;
pub use render::*;
pub use rules::*;
pub use session::*;
pub use store::*;
pub use word_list::*;
pub use word_selector::*;
