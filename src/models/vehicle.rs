//! Vehicle model
//!
//! A vehicle is identified by its plate/number and owns its service records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VehicleId;

/// Maximum length of a vehicle number
pub const MAX_NUMBER_LEN: usize = 50;

/// Maximum length of owner names and model names
pub const MAX_NAME_LEN: usize = 100;

/// A tracked vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,

    /// Plate or registration number, unique across vehicles
    pub vehicle_number: String,

    /// Owner's full name
    pub owner_name: String,

    /// Vehicle model
    pub model: String,

    /// When the vehicle was registered
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a new vehicle
    pub fn new(
        vehicle_number: impl Into<String>,
        owner_name: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            id: VehicleId::new(),
            vehicle_number: vehicle_number.into(),
            owner_name: owner_name.into(),
            model: model.into(),
            created_at: Utc::now(),
        }
    }

    /// Normalize a vehicle number for uniqueness checks and lookups
    pub fn normalize_number(number: &str) -> String {
        number.trim().to_lowercase()
    }

    /// Check if this vehicle has the given number (case-insensitive)
    pub fn matches_number(&self, number: &str) -> bool {
        Self::normalize_number(&self.vehicle_number) == Self::normalize_number(number)
    }

    /// Validate the vehicle
    pub fn validate(&self) -> Result<(), VehicleValidationError> {
        check_field("vehicle number", &self.vehicle_number, MAX_NUMBER_LEN)?;
        check_field("owner name", &self.owner_name, MAX_NAME_LEN)?;
        check_field("model", &self.model, MAX_NAME_LEN)?;
        Ok(())
    }
}

fn check_field(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), VehicleValidationError> {
    if value.trim().is_empty() {
        return Err(VehicleValidationError::Empty(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(VehicleValidationError::TooLong { field, len, max });
    }
    Ok(())
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.vehicle_number, self.model)
    }
}

/// Validation errors for vehicles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleValidationError {
    Empty(&'static str),
    TooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },
}

impl fmt::Display for VehicleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty(field) => write!(f, "Vehicle {} cannot be empty", field),
            Self::TooLong { field, len, max } => {
                write!(f, "Vehicle {} too long ({} chars, max {})", field, len, max)
            }
        }
    }
}

impl std::error::Error for VehicleValidationError {}
