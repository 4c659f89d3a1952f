pub mod commands;
pub mod render;
pub mod setup;
pub mod terminal;
