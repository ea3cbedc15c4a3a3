//! HTTP client for the registration submission service
//!
//! Posts assembled application records as JSON. The endpoint comes from
//! the environment, then the user config, then a local default.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};

use super::traits::{SubmissionApi, SubmissionReply};
use crate::state::{OutboundRecord, SubmissionKind};

/// Default submission service endpoint
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8410";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire envelope: the submission kind plus the flat record
#[derive(Debug, Serialize)]
struct SubmissionEnvelope<'a> {
    kind: &'static str,
    record: &'a OutboundRecord,
}

/// Client for the registration submission service
pub struct HttpSubmissionClient {
    http: Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    /// Create a new client. `endpoint` usually comes from the user config;
    /// the `INTAKE_ENDPOINT` environment variable overrides it.
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let endpoint = std::env::var("INTAKE_ENDPOINT")
            .ok()
            .or(endpoint)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http, endpoint })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl SubmissionApi for HttpSubmissionClient {
    async fn check_connection(&self) -> bool {
        match self.http.get(self.url("health")).send().await {
            Ok(_) => true,
            Err(err) => {
                debug!("submission service unreachable: {err}");
                false
            }
        }
    }

    async fn submit_application(
        &self,
        kind: SubmissionKind,
        record: OutboundRecord,
    ) -> Result<SubmissionReply> {
        let url = self.url("applications");
        debug!("submitting {} to {url}", kind.as_str());

        let response = self
            .http
            .post(&url)
            .json(&SubmissionEnvelope {
                kind: kind.as_str(),
                record: &record,
            })
            .send()
            .await
            .context("failed to reach the submission service")?;

        let status = response.status();
        if !status.is_success() {
            warn!("submission rejected with status {status}");
            bail!("submission failed with status {status}");
        }

        // an empty body is still a success; the reference is optional
        Ok(response
            .json::<SubmissionReply>()
            .await
            .unwrap_or_default())
    }
}
