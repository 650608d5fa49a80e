//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`LightApiError`] at port boundaries.

/// Top-level error returned through port traits and services.
#[derive(Debug, thiserror::Error)]
pub enum LightApiError {
    /// Input rejected by a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested resource does not exist in the home graph.
    #[error("resource not found")]
    NotFound(#[from] NotFoundError),

    /// A vendor backend (bridge, gateway, relay target) failed.
    #[error("backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Lookup miss for a named kind of resource.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of resource, e.g. `"Room"`.
    pub entity: &'static str,
    /// Identifier as it was requested.
    pub id: String,
}

/// Domain validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// An intercom event payload could not be decoded.
    #[error("malformed intercom event payload")]
    MalformedEvent(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_kind_and_id() {
        let err = NotFoundError {
            entity: "Room",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Room abc not found");
    }

    #[test]
    fn should_convert_not_found_into_top_level_error() {
        let err: LightApiError = NotFoundError {
            entity: "Lamp",
            id: "x".to_string(),
        }
        .into();
        assert!(matches!(err, LightApiError::NotFound(_)));
    }

    #[test]
    fn should_keep_json_error_as_source_of_malformed_event() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = LightApiError::from(ValidationError::MalformedEvent(json_err));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "malformed intercom event payload");
    }
}
