//! Outbound delivery.

use crate::metrics_defs::{DISPATCH_DURATION, DISPATCH_FAILURES, DISPATCHES};
use crate::payload::Payload;
use crate::{counter, histogram};
use http::StatusCode;
use std::time::{Duration, Instant};
use url::Url;

/// What came back from the endpoint.
#[derive(Debug)]
pub enum Outcome {
    /// The endpoint answered; body is captured verbatim regardless of status.
    Delivered { status: StatusCode, body: String },
    /// The transport failed before a response could be read.
    Failed { error: String },
}

/// One dispatch attempt with its wall-clock duration.
#[derive(Debug)]
pub struct Delivery {
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl Delivery {
    /// Remote body, or the transport error text as the failure indicator.
    pub fn remote_detail(&self) -> &str {
        match &self.outcome {
            Outcome::Delivered { body, .. } => body,
            Outcome::Failed { error } => error,
        }
    }
}

/// Performs single-attempt JSON POSTs to one configured endpoint.
///
/// TLS peer verification stays at the client default (enabled); there is no
/// retry, no queueing, and no timeout beyond the transport's own.
pub struct Dispatcher {
    client: reqwest::Client,
    url: Url,
}

impl Dispatcher {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Serializes the payload and POSTs it once, capturing the outcome and
    /// elapsed time. Transport problems land in the outcome rather than an
    /// error: the triggering event must complete either way.
    pub async fn send(&self, payload: &Payload) -> Delivery {
        let started = Instant::now();
        counter!(DISPATCHES).increment(1);

        let result = self
            .client
            .post(self.url.clone())
            .json(payload)
            .send()
            .await;

        let outcome = match result {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => Outcome::Delivered { status, body },
                    Err(e) => {
                        counter!(DISPATCH_FAILURES).increment(1);
                        tracing::error!(error = %e, url = %self.url, "failed to read webhook response body");
                        Outcome::Failed {
                            error: e.to_string(),
                        }
                    }
                }
            }
            Err(e) => {
                counter!(DISPATCH_FAILURES).increment(1);
                tracing::error!(error = %e, url = %self.url, "webhook transport failure");
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        let elapsed = started.elapsed();
        histogram!(DISPATCH_DURATION).record(elapsed.as_secs_f64());
        Delivery { outcome, elapsed }
    }
}
