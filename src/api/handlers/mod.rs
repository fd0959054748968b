// src/api/handlers/mod.rs
pub mod generator;
pub mod i18n;
pub mod preferences;
