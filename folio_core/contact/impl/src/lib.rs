use std::{future::Future, sync::Arc};

use folio_core_contact_contracts::{ContactService, ContactSubmitError};
use folio_extern_contracts::dispatch::MessageDispatcher;
use folio_models::contact::{ContactForm, DispatchRequest, SubmissionStatus};
use folio_shared_contracts::time::TimeService;
use tokio::sync::watch;
use tracing::{debug, info, info_span, warn, Instrument};

pub use validate::validate;

pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Time, Dispatcher> {
    time: Time,
    dispatcher: Dispatcher,
    status: Arc<watch::Sender<SubmissionStatus>>,
}

impl<Time, Dispatcher> ContactServiceImpl<Time, Dispatcher> {
    pub fn new(time: Time, dispatcher: Dispatcher) -> Self {
        Self {
            time,
            dispatcher,
            status: Arc::new(watch::Sender::new(SubmissionStatus::Idle)),
        }
    }
}

impl<Time, Dispatcher> ContactService for ContactServiceImpl<Time, Dispatcher>
where
    Time: TimeService,
    Dispatcher: MessageDispatcher,
{
    fn submit(
        &self,
        form: &mut ContactForm,
    ) -> impl Future<Output = Result<SubmissionStatus, ContactSubmitError>> + Send {
        let in_flight = InFlight::acquire(&self.status);

        async move {
            let Some(in_flight) = in_flight else {
                debug!("Another contact form submission is in flight");
                return Err(ContactSubmitError::InProgress);
            };

            let status = self.process(form).await;
            in_flight.finish(status.clone());
            Ok(status)
        }
        .instrument(info_span!("contact_submit"))
    }

    fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    fn is_submitting(&self) -> bool {
        self.status.borrow().is_submitting()
    }

    fn watch_status(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }
}

impl<Time, Dispatcher> ContactServiceImpl<Time, Dispatcher>
where
    Time: TimeService,
    Dispatcher: MessageDispatcher,
{
    async fn process(&self, form: &mut ContactForm) -> SubmissionStatus {
        if let Err(err) = validate(form) {
            debug!(%err, "Contact form is invalid");
            return SubmissionStatus::Failed(err.to_string());
        }

        let request = DispatchRequest::new(form, self.time.now());
        debug!(?request, "Dispatching contact message");

        match self.dispatcher.send(&request).await {
            Ok(()) => {
                info!(name = request.name(), "Contact message sent");
                form.clear();
                SubmissionStatus::succeeded()
            }
            Err(err) => {
                warn!(%err, "Failed to send contact message");
                SubmissionStatus::failed(err.detail.as_deref())
            }
        }
    }
}

/// Marks the status as [`SubmissionStatus::Submitting`] for as long as it is
/// held.
///
/// If dropped without [`InFlight::finish`] (i.e. the submit future was
/// dropped before completion), the status is set to a generic failure so the
/// form does not stay locked.
struct InFlight<'a> {
    status: &'a watch::Sender<SubmissionStatus>,
    finished: bool,
}

impl<'a> InFlight<'a> {
    fn acquire(status: &'a watch::Sender<SubmissionStatus>) -> Option<Self> {
        status
            .send_if_modified(|current| {
                if current.is_submitting() {
                    return false;
                }
                *current = SubmissionStatus::Submitting;
                true
            })
            .then(|| Self {
                status,
                finished: false,
            })
    }

    fn finish(mut self, status: SubmissionStatus) {
        self.finished = true;
        self.status.send_replace(status);
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Contact form submission was abandoned before completion");
            self.status.send_replace(SubmissionStatus::failed(None));
        }
    }
}
