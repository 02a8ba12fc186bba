use crate::models::Status;
use std::{fmt::Display, future::Future, sync::Arc};
use tracing::debug;

/// Classifies the reachability of a health endpoint. Implementations never
/// fail: every error is reported as [`Status::Offline`].
#[async_trait::async_trait]
pub trait StatusProber: Send + Sync {
    async fn probe(&self, endpoint: &str) -> Status;
}

pub struct ReqwestProber {
    client: reqwest::Client,
}

impl ReqwestProber {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn ping(&self, endpoint: &str) -> Result<Status, reqwest::Error> {
        let response = self.client.get(endpoint).send().await?;
        Ok(classify(response.status()))
    }
}

impl Default for ReqwestProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StatusProber for ReqwestProber {
    async fn probe(&self, endpoint: &str) -> Status {
        let status = probe_or_offline(self.ping(endpoint)).await;
        debug!(endpoint, %status, "probe finished");
        status
    }
}

pub fn classify(code: reqwest::StatusCode) -> Status {
    if code.is_success() {
        Status::Active
    } else {
        Status::Offline
    }
}

/// Awaits a fallible status check, reporting any error as offline.
pub async fn probe_or_offline<F, E>(check: F) -> Status
where
    F: Future<Output = Result<Status, E>>,
    E: Display,
{
    match check.await {
        Ok(status) => status,
        Err(err) => {
            debug!(error = %err, "probe failed");
            Status::Offline
        }
    }
}

/// Owned future probing `endpoint`, suitable for handing to the renderer.
pub fn probe_endpoint(
    prober: Arc<dyn StatusProber>,
    endpoint: String,
) -> impl Future<Output = Status> + Send + 'static {
    async move { prober.probe(&endpoint).await }
}
