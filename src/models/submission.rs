use serde::{Deserialize, Serialize};

use super::{Booking, ContactInquiry};

/// Which feedback a form shows. Never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error => "error",
        }
    }
}

/// A completed form handed to the submission sink.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Submission {
    Booking(Booking),
    Contact(ContactInquiry),
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Booking(_) => "booking",
            Submission::Contact(_) => "contact",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Submission::Booking(b) => &b.id,
            Submission::Contact(c) => &c.id,
        }
    }
}
