//! Service type model
//!
//! A category of maintenance (oil change, brake inspection, ...) with a
//! fixed recurrence interval in days.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ServiceTypeId;

/// A kind of maintenance with its recurrence interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    /// Unique identifier
    pub id: ServiceTypeId,

    /// Service name, unique across service types
    pub name: String,

    /// Days between two services of this type
    pub interval_days: i64,
}

impl ServiceType {
    /// Create a new service type
    pub fn new(name: impl Into<String>, interval_days: i64) -> Self {
        Self {
            id: ServiceTypeId::new(),
            name: name.into(),
            interval_days,
        }
    }

    /// Normalize a service type name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this service type matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Validate the service type
    pub fn validate(&self) -> Result<(), ServiceTypeValidationError> {
        if self.name.trim().is_empty() {
            return Err(ServiceTypeValidationError::EmptyName);
        }

        let len = self.name.chars().count();
        if len > 100 {
            return Err(ServiceTypeValidationError::NameTooLong(len));
        }

        if self.interval_days <= 0 {
            return Err(ServiceTypeValidationError::NonPositiveInterval(
                self.interval_days,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (every {} days)", self.name, self.interval_days)
    }
}

/// Validation errors for service types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceTypeValidationError {
    EmptyName,
    NameTooLong(usize),
    NonPositiveInterval(i64),
}

impl fmt::Display for ServiceTypeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Service type name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Service type name too long ({} chars, max 100)", len)
            }
            Self::NonPositiveInterval(days) => {
                write!(f, "Service interval must be positive, got {} days", days)
            }
        }
    }
}

impl std::error::Error for ServiceTypeValidationError {}
