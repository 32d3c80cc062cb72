use std::{
    collections::HashMap,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};

use anyhow::Context;
use axum::{extract::State, http::StatusCode, routing, Json, Router};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{error, info};

pub const SEND_ROUTE: &str = "/api/v1.0/email/send";

const TEMPLATE_PARAMS: [&str; 5] = ["name", "message", "time", "from_email", "reply_to"];

#[derive(Debug, Clone)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

pub async fn start_server(
    host: IpAddr,
    port: u16,
    credentials: EmailJsCredentials,
) -> anyhow::Result<()> {
    info!("Starting EmailJS testing server on {host}:{port}");
    info!("EmailJS send endpoint: http://{host}:{port}{SEND_ROUTE}");
    info!("Credentials: {credentials:?}");
    info!(
        "Senders ending in @quota.invalid are rejected with \"quota exceeded\", senders ending \
         in @silent.invalid get an error without a message"
    );

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(credentials))
        .await
        .context("Failed to start HTTP server")
}

/// Starts the server on an ephemeral localhost port in the background and
/// returns the URL of the send endpoint.
pub async fn spawn(credentials: EmailJsCredentials) -> anyhow::Result<String> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind to localhost")?;
    let addr: SocketAddr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router(credentials)).await {
            error!("EmailJS testing server failed: {err}");
        }
    });

    Ok(format!("http://{addr}{SEND_ROUTE}"))
}

pub fn router(credentials: EmailJsCredentials) -> Router {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(credentials.into())
}

#[derive(Deserialize)]
struct SendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    #[serde(default)]
    template_params: HashMap<String, String>,
}

async fn send(
    State(credentials): State<Arc<EmailJsCredentials>>,
    Json(request): Json<SendRequest>,
) -> (StatusCode, &'static str) {
    if request.user_id != credentials.public_key {
        return (
            StatusCode::BAD_REQUEST,
            "The Public Key is invalid. To find this ID, visit \
             https://dashboard.emailjs.com/admin/account",
        );
    }
    if request.service_id != credentials.service_id {
        return (
            StatusCode::BAD_REQUEST,
            "The service ID is invalid. To find this ID, visit https://dashboard.emailjs.com/admin",
        );
    }
    if request.template_id != credentials.template_id {
        return (
            StatusCode::BAD_REQUEST,
            "The template ID is invalid. To find this ID, visit \
             https://dashboard.emailjs.com/admin/templates",
        );
    }
    if !TEMPLATE_PARAMS
        .iter()
        .all(|param| request.template_params.contains_key(*param))
    {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            "The template params are missing",
        );
    }

    let from_email = &request.template_params["from_email"];
    if from_email.ends_with("@quota.invalid") {
        return (StatusCode::TOO_MANY_REQUESTS, "quota exceeded");
    }
    if from_email.ends_with("@silent.invalid") {
        return (StatusCode::INTERNAL_SERVER_ERROR, "");
    }

    info!(
        %from_email,
        name = %request.template_params["name"],
        "Accepted contact message"
    );
    (StatusCode::OK, "OK")
}
