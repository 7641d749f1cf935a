//! Typed identifiers for vehicles, service types and service records
//!
//! Each identifier wraps a random UUID. Displayed IDs are shortened to a
//! kind prefix plus the first eight hex digits; parsing accepts the full
//! UUID with or without that prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Prefix used when displaying and accepted when parsing
            pub const PREFIX: &'static str = $prefix;

            /// Generate a fresh random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.simple().to_string();
                write!(f, "{}{}", Self::PREFIX, &hex[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix(Self::PREFIX).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifies a [`Vehicle`](super::Vehicle)
    VehicleId,
    "veh-"
);
entity_id!(
    /// Identifies a [`ServiceType`](super::ServiceType)
    ServiceTypeId,
    "svt-"
);
entity_id!(
    /// Identifies a [`ServiceRecord`](super::ServiceRecord)
    ServiceRecordId,
    "svc-"
);
