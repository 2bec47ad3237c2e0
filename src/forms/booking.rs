use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use super::{error_banner, Lifecycle, SubmitFlow, BOOKING_SUCCESS_BANNER};
use crate::catalog::{Service, ServiceCatalog};
use crate::clock::Clock;
use crate::errors::FormError;
use crate::models::{Booking, BookingDraft, BookingField, Submission, SubmissionStatus};
use crate::sink::SinkError;
use crate::validation::{booking_schema, FieldErrors, Schema, ValidationContext};

/// What a booking form renders: the draft, inline errors, and the feedback banner.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    pub draft: BookingDraft,
    pub status: SubmissionStatus,
    pub errors: FieldErrors,
    pub selected_service: Option<Service>,
    pub banner: Option<String>,
    /// Sink error kind while the status is `error`.
    pub failure: Option<&'static str>,
}

pub struct BookingFlow {
    catalog: Arc<ServiceCatalog>,
    clock: Arc<dyn Clock>,
    fallback_phone: String,
    schema: Schema<BookingDraft>,
    draft: BookingDraft,
    errors: FieldErrors,
    lifecycle: Lifecycle,
    failure: Option<&'static str>,
}

impl BookingFlow {
    pub fn new(catalog: Arc<ServiceCatalog>, clock: Arc<dyn Clock>, fallback_phone: String) -> Self {
        let draft = BookingDraft::new(clock.current_year());
        Self {
            catalog,
            clock,
            fallback_phone,
            schema: booking_schema(),
            draft,
            errors: FieldErrors::default(),
            lifecycle: Lifecycle::default(),
            failure: None,
        }
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn select_service(&mut self, id: &str) {
        if self.draft.service_id != id {
            self.draft.service_id = id.to_string();
        }
    }

    pub fn selected_service(&self) -> Option<&Service> {
        self.catalog.get(&self.draft.service_id)
    }

    pub fn update_field(&mut self, field: BookingField, value: &str) -> Result<(), FormError> {
        match field {
            BookingField::ServiceId => self.select_service(value),
            BookingField::CustomerName => self.draft.customer_name = value.to_string(),
            BookingField::CustomerEmail => self.draft.customer_email = value.to_string(),
            BookingField::CustomerPhone => self.draft.customer_phone = value.to_string(),
            BookingField::VehicleMake => self.draft.vehicle_make = value.to_string(),
            BookingField::VehicleModel => self.draft.vehicle_model = value.to_string(),
            // a non-numeric year is kept as "missing" and reported on submit
            BookingField::VehicleYear => self.draft.vehicle_year = value.trim().parse().ok(),
            BookingField::PreferredDate => {
                let value = value.trim();
                self.draft.preferred_date = if value.is_empty() {
                    None
                } else {
                    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
                        FormError::InvalidValue {
                            field: field.as_str(),
                            reason: e.to_string(),
                        }
                    })?;
                    Some(date)
                };
            }
            BookingField::PreferredTime => self.draft.preferred_time = value.to_string(),
            BookingField::Notes => {
                self.draft.notes = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> FieldErrors {
        let ctx = ValidationContext::new(self.clock.as_ref()).with_catalog(&self.catalog);
        self.schema.validate(&self.draft, &ctx)
    }

    pub fn snapshot(&self) -> BookingSnapshot {
        let status = self.lifecycle.status();
        let banner = match status {
            SubmissionStatus::Success => Some(BOOKING_SUCCESS_BANNER.to_string()),
            SubmissionStatus::Error => Some(error_banner(&self.fallback_phone)),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        };
        BookingSnapshot {
            draft: self.draft.clone(),
            status,
            errors: self.errors.clone(),
            selected_service: self.selected_service().cloned(),
            banner,
            failure: self.failure.filter(|_| status == SubmissionStatus::Error),
        }
    }

    fn build_booking(&self) -> Option<Booking> {
        let service = self.selected_service()?;
        Some(Booking::new_pending(
            &self.draft,
            service.name.clone(),
            service.price,
            self.draft.vehicle_year?,
            self.draft.preferred_date?,
            self.clock.now(),
        ))
    }
}

impl SubmitFlow for BookingFlow {
    type Draft = BookingDraft;

    fn replace_draft(&mut self, draft: BookingDraft) {
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

        let Some(booking) = self.build_booking() else {
            let mut errors = FieldErrors::default();
            errors.insert(BookingField::ServiceId.as_str(), "Please select a valid service");
            self.errors = errors.clone();
            return Err(FormError::Validation(errors));
        };

        self.lifecycle.begin()?;
        self.errors = FieldErrors::default();
        self.failure = None;
        Ok(Submission::Booking(booking))
    }

    fn complete_submit(&mut self, outcome: &Result<(), SinkError>) -> u64 {
        match outcome {
            Ok(()) => {
                self.draft = BookingDraft::new(self.clock.current_year());
                self.lifecycle.finish(true)
            }
            Err(e) => {
                self.failure = Some(e.kind());
                self.lifecycle.finish(false)
            }
        }
    }

    fn reset_status(&mut self, generation: u64) -> bool {
        self.lifecycle.reset(generation)
    }

    fn status(&self) -> SubmissionStatus {
        self.lifecycle.status()
    }
}
