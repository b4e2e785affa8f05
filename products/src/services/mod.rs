// products/src/services/mod.rs

pub mod product_service;
