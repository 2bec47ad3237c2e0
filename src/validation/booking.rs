use super::{is_email, min_chars, Schema};
use crate::models::{BookingDraft, TIME_SLOTS};

pub const MIN_VEHICLE_YEAR: i32 = 1900;

pub fn booking_schema() -> Schema<BookingDraft> {
    Schema::<BookingDraft>::new()
        .rule(
            "serviceId",
            |d, _| !d.service_id.trim().is_empty(),
            "Please select a service",
        )
        .rule(
            "serviceId",
            |d, ctx| ctx.catalog.is_some_and(|c| c.contains(&d.service_id)),
            "Please select a valid service",
        )
        .rule(
            "customerName",
            |d, _| min_chars(&d.customer_name, 2),
            "Name must be at least 2 characters",
        )
        .rule(
            "customerEmail",
            |d, _| is_email(&d.customer_email),
            "Please enter a valid email",
        )
        .rule(
            "customerPhone",
            |d, _| min_chars(&d.customer_phone, 10),
            "Please enter a valid phone number",
        )
        .rule(
            "vehicleMake",
            |d, _| min_chars(&d.vehicle_make, 2),
            "Please enter vehicle make",
        )
        .rule(
            "vehicleModel",
            |d, _| min_chars(&d.vehicle_model, 2),
            "Please enter vehicle model",
        )
        .rule(
            "vehicleYear",
            |d, _| d.vehicle_year.is_some(),
            "Please enter vehicle year",
        )
        .rule(
            "vehicleYear",
            |d, _| d.vehicle_year.is_some_and(|y| y >= MIN_VEHICLE_YEAR),
            "Vehicle year must be 1900 or later",
        )
        // upper bound follows the clock, so it moves on New Year's Day
        .rule(
            "vehicleYear",
            |d, ctx| d.vehicle_year.is_some_and(|y| y <= ctx.current_year() + 1),
            "Vehicle year cannot be later than next year",
        )
        .rule(
            "preferredDate",
            |d, _| d.preferred_date.is_some(),
            "Please select a date",
        )
        .rule(
            "preferredDate",
            |d, ctx| d.preferred_date.is_some_and(|date| date >= ctx.today),
            "Preferred date cannot be in the past",
        )
        .rule(
            "preferredTime",
            |d, _| !d.preferred_time.trim().is_empty(),
            "Please select a time",
        )
        .rule(
            "preferredTime",
            |d, _| TIME_SLOTS.contains(&d.preferred_time.as_str()),
            "Please select one of the available times",
        )
}
