use std::future::Future;

use folio_models::contact::DispatchRequest;
use thiserror::Error;

/// Delivers a contact form submission to an external message provider.
///
/// Each call performs exactly one delivery attempt. Implementations must not
/// retry internally; any non-success outcome is reported as a
/// [`DispatchError`].
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait MessageDispatcher: Send + Sync + 'static {
    fn send(
        &self,
        request: &DispatchRequest,
    ) -> impl Future<Output = Result<(), DispatchError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to dispatch message: {}", .detail.as_deref().unwrap_or("no details available"))]
pub struct DispatchError {
    /// Human-readable explanation provided by the message provider, if any.
    pub detail: Option<String>,
}

impl DispatchError {
    /// Creates a new error, discarding `detail` if it is blank.
    pub fn new(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = detail.trim();
        Self {
            detail: (!detail.is_empty()).then(|| detail.into()),
        }
    }

    pub fn without_detail() -> Self {
        Self { detail: None }
    }
}

#[cfg(feature = "mock")]
impl MockMessageDispatcher {
    pub fn with_send(mut self, request: DispatchRequest, result: Result<(), DispatchError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(request))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
