//! Email delivery: the only outbound call the site makes.
//!
//! `AppState` carries an `Arc<dyn EmailDelivery>`; production uses
//! `EmailJsClient`, tests swap in a recording fake.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::contact::inflight::InFlightClaim;
use crate::contact::validation::ContactSubmission;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Delivery rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Delivery task ended without reporting an outcome")]
    Abandoned,
}

/// Template parameters expected by the email template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

impl From<&ContactSubmission> for EmailPayload {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            from_name: submission.name().to_string(),
            reply_to: submission.email().to_string(),
            message: submission.message().to_string(),
        }
    }
}

#[async_trait]
pub trait EmailDelivery: Send + Sync {
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError>;
}

/// Service, template and public-key identifiers for the EmailJS account.
#[derive(Debug, Clone)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl EmailJsCredentials {
    pub const PLACEHOLDER_SERVICE_ID: &'static str = "YOUR_SERVICE_ID";
    pub const PLACEHOLDER_TEMPLATE_ID: &'static str = "YOUR_TEMPLATE_ID";
    pub const PLACEHOLDER_PUBLIC_KEY: &'static str = "YOUR_PUBLIC_KEY";

    pub fn is_placeholder(&self) -> bool {
        self.service_id == Self::PLACEHOLDER_SERVICE_ID
            || self.template_id == Self::PLACEHOLDER_TEMPLATE_ID
            || self.public_key == Self::PLACEHOLDER_PUBLIC_KEY
    }
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a EmailPayload,
}

/// EmailJS REST client. One request per call, no retries.
#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    api_url: String,
    credentials: EmailJsCredentials,
}

impl EmailJsClient {
    pub fn new(
        api_url: String,
        credentials: EmailJsCredentials,
        timeout: Duration,
    ) -> Result<Self, DeliveryError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_url,
            credentials,
        })
    }
}

#[async_trait]
impl EmailDelivery for EmailJsClient {
    async fn send(&self, payload: &EmailPayload) -> Result<(), DeliveryError> {
        let body = EmailJsRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: payload,
        };

        let response = self.client.post(&self.api_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("EmailJS returned {}: {}", status, message);
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        debug!("EmailJS accepted message from {}", payload.reply_to);
        Ok(())
    }
}

/// Runs one delivery on a detached task and hands back a receiver for its
/// outcome. If the receiver is dropped first, the outcome is logged and
/// discarded. The claim is held until the call returns.
pub fn dispatch(
    delivery: Arc<dyn EmailDelivery>,
    claim: InFlightClaim,
) -> oneshot::Receiver<Result<(), DeliveryError>> {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let payload = claim.payload();
        let outcome = delivery.send(payload).await;
        match &outcome {
            Ok(()) => info!("Contact message from {} delivered", payload.reply_to),
            Err(e) => warn!("Contact message from {} failed: {e}", payload.reply_to),
        }
        drop(claim);
        if tx.send(outcome).is_err() {
            debug!("Contact delivery settled after the page view ended");
        }
    });

    rx
}
