use std::future::Future;

use folio_models::contact::{ContactForm, SubmissionStatus};
use thiserror::Error;
use tokio::sync::watch;

/// Drives a contact form through validation and delivery.
///
/// The service is the only writer of the [`SubmissionStatus`]; presentation
/// code observes it through [`ContactService::watch_status`] or
/// [`ContactService::status`].
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Submits the form.
    ///
    /// The status switches to [`SubmissionStatus::Submitting`] as soon as this
    /// method is called, before the returned future is polled. If another
    /// submission is already in flight, the future resolves to
    /// [`ContactSubmitError::InProgress`] and nothing else happens.
    ///
    /// On successful delivery `form` is cleared. In every other case it is
    /// left untouched.
    fn submit(
        &self,
        form: &mut ContactForm,
    ) -> impl Future<Output = Result<SubmissionStatus, ContactSubmitError>> + Send;

    /// Returns a snapshot of the current status.
    fn status(&self) -> SubmissionStatus;

    /// Returns whether a submission is currently in flight.
    fn is_submitting(&self) -> bool;

    /// Returns a receiver that observes every status transition.
    fn watch_status(&self) -> watch::Receiver<SubmissionStatus>;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("A message is already being sent.")]
    InProgress,
}

/// The reason a contact form was rejected before delivery.
///
/// The [`Display`](std::fmt::Display) implementation is the message shown to
/// the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("Please enter a message")]
    MissingMessage,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_submit(
        mut self,
        form: ContactForm,
        result: Result<SubmissionStatus, ContactSubmitError>,
    ) -> Self {
        let clear = matches!(result, Ok(SubmissionStatus::Succeeded(_)));
        self.expect_submit()
            .once()
            .withf(move |x| *x == form)
            .return_once(move |x| {
                if clear {
                    x.clear();
                }
                Box::pin(std::future::ready(result))
            });
        self
    }
}
