pub mod booking;
pub mod contact;
pub mod registry;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

use crate::errors::FormError;
use crate::models::{Submission, SubmissionStatus};
use crate::sink::{SinkError, SubmissionSink};

pub use booking::{BookingFlow, BookingSnapshot};
pub use contact::{ContactFlow, ContactSnapshot};
pub use registry::FormRegistry;

pub const BOOKING_SUCCESS_BANNER: &str =
    "Booking Confirmed! We will send you a confirmation email shortly. See you soon!";
pub const CONTACT_SUCCESS_BANNER: &str = "Thank you! We'll get back to you within 24 hours.";

pub fn error_banner(fallback_phone: &str) -> String {
    format!("Something went wrong. Please try again or call us at {fallback_phone}")
}

/// idle -> submitting -> success | error -> idle
///
/// The generation counter ties a scheduled reset to the submission that produced it, so a
/// reset left over from an earlier submission never clears a newer result.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    status: SubmissionStatus,
    generation: u64,
}

impl Lifecycle {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin(&mut self) -> Result<(), FormError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(FormError::Busy);
        }
        self.status = SubmissionStatus::Submitting;
        Ok(())
    }

    pub fn finish(&mut self, succeeded: bool) -> u64 {
        self.status = if succeeded {
            SubmissionStatus::Success
        } else {
            SubmissionStatus::Error
        };
        self.generation += 1;
        self.generation
    }

    pub fn reset(&mut self, generation: u64) -> bool {
        let settled = matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        );
        if settled && generation == self.generation {
            self.status = SubmissionStatus::Idle;
            return true;
        }
        false
    }
}

/// The submit half of a form controller, shared by booking and contact forms.
pub trait SubmitFlow: Send + 'static {
    type Draft: Send + 'static;

    /// Swaps in a whole draft, as when a client submits every field at once.
    fn replace_draft(&mut self, draft: Self::Draft);

    /// Validates and moves to submitting. Rejects with `Busy` while a submission is in flight.
    fn begin_submit(&mut self) -> Result<Submission, FormError>;

    /// `begin_submit`, optionally after replacing the draft. Both happen under one lock, and a
    /// busy form keeps its draft.
    fn begin_submit_with(&mut self, draft: Option<Self::Draft>) -> Result<Submission, FormError> {
        if let Some(draft) = draft {
            if self.status() == SubmissionStatus::Submitting {
                return Err(FormError::Busy);
            }
            self.replace_draft(draft);
        }
        self.begin_submit()
    }

    /// Records the sink outcome and returns the generation to pass to `reset_status`.
    fn complete_submit(&mut self, outcome: &Result<(), SinkError>) -> u64;

    fn reset_status(&mut self, generation: u64) -> bool;

    fn status(&self) -> SubmissionStatus;
}

pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Drives one submission: validate under the lock, deliver without it, record the outcome,
/// then put the form back to idle `reset_after` later.
pub async fn run_submission<F: SubmitFlow>(
    form: Arc<Mutex<F>>,
    draft: Option<F::Draft>,
    sink: Arc<dyn SubmissionSink>,
    reset_after: Duration,
) -> Result<SubmissionStatus, FormError> {
    let submission = lock(&form).begin_submit_with(draft)?;
    tracing::info!(
        kind = submission.kind(),
        id = submission.id(),
        "submitting form"
    );

    let outcome = sink.deliver(&submission).await;
    if let Err(e) = &outcome {
        tracing::warn!(kind = submission.kind(), error = %e, "submission failed");
    }

    let (generation, status) = {
        let mut guard = lock(&form);
        let generation = guard.complete_submit(&outcome);
        (generation, guard.status())
    };

    let deadline = Instant::now() + reset_after;
    let form = Arc::clone(&form);
    tokio::spawn(async move {
        tokio::time::sleep_until(deadline).await;
        if lock(&form).reset_status(generation) {
            tracing::debug!(generation, "form status reset to idle");
        }
    });

    Ok(status)
}
