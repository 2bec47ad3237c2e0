use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Appointment slots offered on the booking form.
pub const TIME_SLOTS: [&str; 10] = [
    "8:00 AM", "9:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "1:00 PM", "2:00 PM", "3:00 PM",
    "4:00 PM", "5:00 PM",
];

/// In-memory booking form contents before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    pub service_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: Option<i32>,
    pub preferred_date: Option<NaiveDate>,
    pub preferred_time: String,
    pub notes: Option<String>,
}

impl BookingDraft {
    /// The shape a freshly mounted form starts from.
    pub fn new(current_year: i32) -> Self {
        Self {
            vehicle_year: Some(current_year),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    ServiceId,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    VehicleMake,
    VehicleModel,
    VehicleYear,
    PreferredDate,
    PreferredTime,
    Notes,
}

impl BookingField {
    pub const ALL: [BookingField; 10] = [
        BookingField::ServiceId,
        BookingField::CustomerName,
        BookingField::CustomerEmail,
        BookingField::CustomerPhone,
        BookingField::VehicleMake,
        BookingField::VehicleModel,
        BookingField::VehicleYear,
        BookingField::PreferredDate,
        BookingField::PreferredTime,
        BookingField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::ServiceId => "serviceId",
            BookingField::CustomerName => "customerName",
            BookingField::CustomerEmail => "customerEmail",
            BookingField::CustomerPhone => "customerPhone",
            BookingField::VehicleMake => "vehicleMake",
            BookingField::VehicleModel => "vehicleModel",
            BookingField::VehicleYear => "vehicleYear",
            BookingField::PreferredDate => "preferredDate",
            BookingField::PreferredTime => "preferredTime",
            BookingField::Notes => "notes",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == s)
    }
}

/// A booking as it would be recorded by the submission sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub service_id: String,
    pub service_name: String,
    pub service_price: Decimal,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub vehicle_year: i32,
    pub preferred_date: NaiveDate,
    pub preferred_time: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub payment_amount: Option<Decimal>,
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn new_pending(
        draft: &BookingDraft,
        service_name: String,
        service_price: Decimal,
        vehicle_year: i32,
        preferred_date: NaiveDate,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_name: draft.customer_name.trim().to_string(),
            customer_email: draft.customer_email.trim().to_string(),
            customer_phone: draft.customer_phone.trim().to_string(),
            service_id: draft.service_id.clone(),
            service_name,
            service_price,
            vehicle_make: draft.vehicle_make.trim().to_string(),
            vehicle_model: draft.vehicle_model.trim().to_string(),
            vehicle_year,
            preferred_date,
            preferred_time: draft.preferred_time.clone(),
            notes: draft.notes.clone(),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_amount: None,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in_progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

}

// Carried on the record for the sink; nothing in this crate charges money.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Partial,
    Refunded,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
            PaymentStatus::Partial => "partial",
            PaymentStatus::Refunded => "refunded",
            PaymentStatus::Failed => "failed",
        }
    }

}
