use std::sync::Arc;

use folio_extern_contracts::dispatch::{DispatchError, MessageDispatcher};
use folio_models::contact::DispatchRequest;
use folio_utils::trace_instrument;
use reqwest::StatusCode;
use serde::Serialize;
use tracing::warn;
use url::Url;

use crate::http::HttpClient;

/// https://www.emailjs.com/docs/rest-api/send/
const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Sends contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsDispatcher {
    config: EmailJsDispatcherConfig,
    http: HttpClient,
}

impl EmailJsDispatcher {
    pub fn new(config: EmailJsDispatcherConfig, http: HttpClient) -> Self {
        Self { config, http }
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsDispatcherConfig {
    service_id: Arc<str>,
    template_id: Arc<str>,
    public_key: Arc<str>,
    send_endpoint: Arc<Url>,
}

impl EmailJsDispatcherConfig {
    pub fn new(
        service_id: impl Into<Arc<str>>,
        template_id: impl Into<Arc<str>>,
        public_key: impl Into<Arc<str>>,
        send_endpoint_override: Option<Url>,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            template_id: template_id.into(),
            public_key: public_key.into(),
            send_endpoint: send_endpoint_override
                .unwrap_or_else(|| SEND_ENDPOINT.parse().unwrap())
                .into(),
        }
    }

    pub fn send_endpoint(&self) -> &Url {
        &self.send_endpoint
    }
}

impl MessageDispatcher for EmailJsDispatcher {
    #[trace_instrument(skip(self), level = "debug")]
    async fn send(&self, request: &DispatchRequest) -> Result<(), DispatchError> {
        let timestamp = request.timestamp();
        let body = SendRequest::new(&self.config, request, &timestamp);

        let response = self
            .http
            .post(self.config.send_endpoint().clone())
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                warn!(error = %err, "Failed to reach EmailJS");
                DispatchError::without_detail()
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let detail = response.text().await.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to read EmailJS error response");
            String::new()
        });
        warn!(%status, %detail, "EmailJS rejected contact message");

        Err(DispatchError::new(detail))
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    message: &'a str,
    time: &'a str,
    from_email: &'a str,
    reply_to: &'a str,
}

impl<'a> SendRequest<'a> {
    fn new(
        config: &'a EmailJsDispatcherConfig,
        request: &'a DispatchRequest,
        timestamp: &'a str,
    ) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: TemplateParams {
                name: request.name(),
                message: request.message(),
                time: timestamp,
                from_email: request.email(),
                reply_to: request.email(),
            },
        }
    }
}
