use folio_extern_contracts::dispatch::{DispatchError, MessageDispatcher};
use folio_models::contact::DispatchRequest;
use tracing::{debug, info};

/// Dispatcher that only logs the request and always reports success.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

impl MessageDispatcher for LogDispatcher {
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        info!(
            name = request.name(),
            email = request.email(),
            time = %request.timestamp(),
            "Dry run, contact message was not sent"
        );
        debug!(message = request.message());
        Ok(())
    }
}
