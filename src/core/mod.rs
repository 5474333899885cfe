//! Configuration, request models and input normalization

pub mod config;
pub mod models;
pub mod normalize;
