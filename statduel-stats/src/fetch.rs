use statduel_core::StatduelError;

/// Converts a collaborator result into an optional value, logging the cause of
/// an absence.
pub fn or_absent<T>(result: Result<T, StatduelError>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "{what} unavailable");
            None
        }
    }
}
