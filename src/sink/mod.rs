pub mod http;
pub mod log;

use async_trait::async_trait;

use crate::models::Submission;

pub use self::http::HttpSink;
pub use self::log::LogSink;

/// Something went wrong delivering a completed form. Shown to the user as one retry banner.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("submission endpoint timed out")]
    Timeout,

    #[error("could not reach submission endpoint: {0}")]
    Network(String),

    #[error("submission endpoint rejected the request with status {status}")]
    Rejected { status: u16 },
}

impl SinkError {
    /// Short tag shown on a failed form's snapshot.
    pub fn kind(&self) -> &'static str {
        match self {
            SinkError::Timeout => "timeout",
            SinkError::Network(_) => "network",
            SinkError::Rejected { .. } => "rejected",
        }
    }
}

/// Where completed bookings and contact inquiries go.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn deliver(&self, submission: &Submission) -> Result<(), SinkError>;
}
