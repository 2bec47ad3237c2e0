pub mod booking;
pub mod contact;
pub mod submission;

pub use booking::{
    Booking, BookingDraft, BookingField, BookingStatus, PaymentStatus, TIME_SLOTS,
};
pub use contact::{ContactDraft, ContactField, ContactInquiry};
pub use submission::{Submission, SubmissionStatus};
