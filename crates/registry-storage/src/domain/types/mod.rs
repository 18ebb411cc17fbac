//! # Types Module
//!
//! Storage configuration.

mod config;


pub use config::StorageConfig;
