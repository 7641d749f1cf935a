//! RideCare - Terminal-based vehicle maintenance tracker
//!
//! This library provides the core functionality for the RideCare command
//! line tool. It keeps a registry of vehicles, a catalogue of service types
//! with recurrence intervals, and the service records performed on each
//! vehicle, and derives for every record whether its next service is
//! overdue, due soon or upcoming.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (vehicles, service types, service records)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (status, detail views, history)
//! - `audit`: Audit logging system
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use chrono::Utc;
//! use ridecare::config::paths::RideCarePaths;
//! use ridecare::services::ServiceRecordService;
//! use ridecare::storage::Storage;
//!
//! let storage = Storage::open(RideCarePaths::new()?)?;
//! let overdue = ServiceRecordService::new(&storage).overdue(Utc::now())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RideCareError, RideCareResult};
