//! Configuration module for RideCare
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RideCarePaths;
pub use settings::Settings;
