//! Typed path parameter helpers.

use uuid::Uuid;

use hirehub_core::error::AppError;

/// Parses a record id from a path segment.
///
/// A segment that is not a UUID cannot reference any record, so it maps
/// to the same absence error as a well-formed id with no match.
pub fn parse_record_id(segment: &str, not_found_message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(segment).map_err(|_| AppError::not_found(not_found_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hirehub_core::error::ErrorKind;

    #[test]
    fn garbage_segment_maps_to_not_found() {
        let err = parse_record_id("not-a-uuid", "Job not found").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "Job not found");

        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string(), "x").unwrap(), id);
    }
}
