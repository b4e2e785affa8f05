// shopping/src/services/mod.rs

pub mod shopping_service;
