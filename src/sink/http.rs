use std::time::Duration;

use async_trait::async_trait;

use super::{SinkError, SubmissionSink};
use crate::models::Submission;

/// Posts submissions as JSON to `{endpoint}/bookings` and `{endpoint}/contact`.
pub struct HttpSink {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new(endpoint: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, submission: &Submission) -> String {
        let path = match submission {
            Submission::Booking(_) => "bookings",
            Submission::Contact(_) => "contact",
        };
        format!("{}/{path}", self.endpoint)
    }
}

#[async_trait]
impl SubmissionSink for HttpSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        let url = self.url_for(submission);
        let body = match submission {
            Submission::Booking(b) => serde_json::to_value(b),
            Submission::Contact(c) => serde_json::to_value(c),
        }
        .map_err(|e| SinkError::Network(e.to_string()))?;

        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SinkError::Timeout
                } else {
                    SinkError::Network(e.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "submission endpoint rejected request");
            return Err(SinkError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(kind = submission.kind(), id = submission.id(), "submission delivered");
        Ok(())
    }
}
