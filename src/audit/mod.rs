//! Audit logging for RideCare
//!
//! Every create and delete is appended to `audit.log` as one JSON object per
//! line, so the history of the fleet data can be reconstructed after the
//! fact. Cascaded deletes carry the operation that triggered them.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
