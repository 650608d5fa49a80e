//! Relay port — outbound calls triggered by intercom events.

use std::future::Future;

use lightapi_domain::error::LightApiError;

/// Downstream services the intercom listener talks to.
pub trait HomeRelay {
    /// Ask the home control service to toggle "home active".
    fn toggle_home(&self) -> impl Future<Output = Result<(), LightApiError>> + Send;

    /// Tell the home-automation controller that the doorbell rang.
    fn ring_doorbell(&self) -> impl Future<Output = Result<(), LightApiError>> + Send;
}

impl<T: HomeRelay + Send + Sync> HomeRelay for std::sync::Arc<T> {
    fn toggle_home(&self) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).toggle_home()
    }

    fn ring_doorbell(&self) -> impl Future<Output = Result<(), LightApiError>> + Send {
        (**self).ring_doorbell()
    }
}
