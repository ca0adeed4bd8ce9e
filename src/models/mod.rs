// src/models/mod.rs
pub mod bates;
pub mod gbm;
pub mod heston;
pub mod merton;
