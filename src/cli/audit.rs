//! Audit log CLI command

use crate::error::RideCareResult;
use crate::storage::Storage;

/// Print the most recent `count` audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, count: usize) -> RideCareResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
