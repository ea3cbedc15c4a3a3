//! Trait abstraction for the submission service client to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::state::{OutboundRecord, SubmissionKind};

/// Reply from the submission service
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionReply {
    /// Server-assigned application reference, when provided
    #[serde(default)]
    pub reference: Option<String>,
}

/// Trait for submission service operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionApi: Send + Sync {
    /// Check if the submission service is reachable
    async fn check_connection(&self) -> bool;

    /// Send one completed application record
    async fn submit_application(
        &self,
        kind: SubmissionKind,
        record: OutboundRecord,
    ) -> Result<SubmissionReply>;
}
