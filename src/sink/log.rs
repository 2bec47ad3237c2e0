use std::time::Duration;

use async_trait::async_trait;

use super::{SinkError, SubmissionSink};
use crate::models::Submission;

/// Logs each submission and waits a fixed delay before reporting success.
/// Used when no submission endpoint is configured.
pub struct LogSink {
    booking_delay: Duration,
    contact_delay: Duration,
}

impl LogSink {
    pub fn new(booking_delay: Duration, contact_delay: Duration) -> Self {
        Self {
            booking_delay,
            contact_delay,
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(1000))
    }
}

#[async_trait]
impl SubmissionSink for LogSink {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError> {
        let payload = serde_json::to_string(submission).unwrap_or_default();
        tracing::info!(
            kind = submission.kind(),
            id = submission.id(),
            %payload,
            "submission received (log only)"
        );

        let delay = match submission {
            Submission::Booking(booking) => {
                tracing::debug!(
                    status = booking.status.as_str(),
                    payment = booking.payment_status.as_str(),
                    service = %booking.service_name,
                    "booking recorded"
                );
                self.booking_delay
            }
            Submission::Contact(_) => self.contact_delay,
        };
        tokio::time::sleep(delay).await;
        Ok(())
    }
}
