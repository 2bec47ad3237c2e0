use super::{is_email, min_chars, Schema};
use crate::models::ContactDraft;

pub fn contact_schema() -> Schema<ContactDraft> {
    Schema::<ContactDraft>::new()
        .rule(
            "name",
            |d, _| min_chars(&d.name, 2),
            "Name must be at least 2 characters",
        )
        .rule("email", |d, _| is_email(&d.email), "Please enter a valid email")
        .rule(
            "phone",
            |d, _| min_chars(&d.phone, 10),
            "Please enter a valid phone number",
        )
        .rule(
            "subject",
            |d, _| min_chars(&d.subject, 3),
            "Subject must be at least 3 characters",
        )
        .rule(
            "message",
            |d, _| min_chars(&d.message, 10),
            "Message must be at least 10 characters",
        )
}
