// src/services/mod.rs
pub mod prompt;
pub mod provider;
pub mod relay;
pub mod transcript_store;
