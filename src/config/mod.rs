/// Database configuration and connection management
pub mod database;

/// Initial settings loading from config.toml
pub mod defaults;
