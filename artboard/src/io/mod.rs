//! Side-effecting collaborators: terminal, configuration and storage.

pub mod config;
pub mod console;
pub mod screen;
pub mod sqlite;
pub mod store;
