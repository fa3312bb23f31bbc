pub mod app;
pub mod bootstrap;
pub mod command;
pub mod config;
pub mod terminal;
