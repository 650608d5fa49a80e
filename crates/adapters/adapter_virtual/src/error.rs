//! Virtual backend error types.

use lightapi_domain::error::LightApiError;

/// Errors raised by the in-memory backends.
#[derive(Debug, thiserror::Error)]
pub enum VirtualError {
    /// The backend was taken offline with `set_offline(true)`.
    #[error("virtual {0} is offline")]
    Offline(&'static str),
}

impl VirtualError {
    /// Convert into the domain-level error type.
    #[must_use]
    pub fn into_domain(self) -> LightApiError {
        LightApiError::Backend(Box::new(self))
    }
}
