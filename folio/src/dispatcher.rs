use folio_config::EmailJsConfig;
use folio_extern_contracts::dispatch::{DispatchError, MessageDispatcher};
use folio_extern_impl::{
    emailjs::{EmailJsDispatcher, EmailJsDispatcherConfig},
    http::HttpClient,
    log::LogDispatcher,
};
use folio_models::contact::DispatchRequest;

/// The dispatcher selected at startup.
#[derive(Debug, Clone)]
pub enum Dispatcher {
    EmailJs(EmailJsDispatcher),
    DryRun(LogDispatcher),
}

impl Dispatcher {
    pub fn new(config: &EmailJsConfig, dry_run: bool) -> anyhow::Result<Self> {
        if dry_run {
            return Ok(Self::DryRun(LogDispatcher));
        }
        emailjs(config).map(Self::EmailJs)
    }
}

impl MessageDispatcher for Dispatcher {
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        match self {
            Self::EmailJs(dispatcher) => dispatcher.send(request).await,
            Self::DryRun(dispatcher) => dispatcher.send(request).await,
        }
    }
}

pub fn emailjs(config: &EmailJsConfig) -> anyhow::Result<EmailJsDispatcher> {
    let http = HttpClient::new(config.timeout.map(Into::into))?;
    let config = EmailJsDispatcherConfig::new(
        config.service_id.as_str(),
        config.template_id.as_str(),
        config.public_key.as_str(),
        config.send_endpoint_override.clone(),
    );
    Ok(EmailJsDispatcher::new(config, http))
}
