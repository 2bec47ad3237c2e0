use std::sync::Arc;

use serde::Serialize;

use super::{error_banner, Lifecycle, SubmitFlow, CONTACT_SUCCESS_BANNER};
use crate::clock::Clock;
use crate::errors::FormError;
use crate::models::{ContactDraft, ContactField, ContactInquiry, Submission, SubmissionStatus};
use crate::sink::SinkError;
use crate::validation::{contact_schema, FieldErrors, Schema, ValidationContext};

#[derive(Debug, Clone, Serialize)]
pub struct ContactSnapshot {
    pub draft: ContactDraft,
    pub status: SubmissionStatus,
    pub errors: FieldErrors,
    pub banner: Option<String>,
    pub failure: Option<&'static str>,
}

pub struct ContactFlow {
    clock: Arc<dyn Clock>,
    fallback_phone: String,
    schema: Schema<ContactDraft>,
    draft: ContactDraft,
    errors: FieldErrors,
    lifecycle: Lifecycle,
    failure: Option<&'static str>,
}

impl ContactFlow {
    pub fn new(clock: Arc<dyn Clock>, fallback_phone: String) -> Self {
        Self {
            clock,
            fallback_phone,
            schema: contact_schema(),
            draft: ContactDraft::default(),
            errors: FieldErrors::default(),
            lifecycle: Lifecycle::default(),
            failure: None,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn update_field(&mut self, field: ContactField, value: &str) {
        let slot = match field {
            ContactField::Name => &mut self.draft.name,
            ContactField::Email => &mut self.draft.email,
            ContactField::Phone => &mut self.draft.phone,
            ContactField::Subject => &mut self.draft.subject,
            ContactField::Message => &mut self.draft.message,
        };
        *slot = value.to_string();
    }

    pub fn validate(&self) -> FieldErrors {
        let ctx = ValidationContext::new(self.clock.as_ref());
        self.schema.validate(&self.draft, &ctx)
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        let status = self.lifecycle.status();
        let banner = match status {
            SubmissionStatus::Success => Some(CONTACT_SUCCESS_BANNER.to_string()),
            SubmissionStatus::Error => Some(error_banner(&self.fallback_phone)),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        };
        ContactSnapshot {
            draft: self.draft.clone(),
            status,
            errors: self.errors.clone(),
            banner,
            failure: self.failure.filter(|_| status == SubmissionStatus::Error),
        }
    }
}

impl SubmitFlow for ContactFlow {
    type Draft = ContactDraft;

    fn replace_draft(&mut self, draft: ContactDraft) {
        self.draft = draft;
    }

    fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.lifecycle.status() == SubmissionStatus::Submitting {
            return Err(FormError::Busy);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        }

        self.lifecycle.begin()?;
        self.errors = FieldErrors::default();
        self.failure = None;
        Ok(Submission::Contact(ContactInquiry::from_draft(
            &self.draft,
            self.clock.now(),
        )))
    }

    fn complete_submit(&mut self, outcome: &Result<(), SinkError>) -> u64 {
        match outcome {
            Ok(()) => self.draft = ContactDraft::default(),
            Err(e) => self.failure = Some(e.kind()),
        }
        self.lifecycle.finish(outcome.is_ok())
    }

    fn reset_status(&mut self, generation: u64) -> bool {
        self.lifecycle.reset(generation)
    }

    fn status(&self) -> SubmissionStatus {
        self.lifecycle.status()
    }
}
