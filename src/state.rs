use std::sync::Arc;

use crate::carousel::CarouselHandle;
use crate::catalog::{BusinessInfo, ServiceCatalog};
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::forms::{BookingFlow, ContactFlow, FormRegistry};
use crate::sink::SubmissionSink;
use crate::slides::CarouselSlide;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Arc<ServiceCatalog>,
    pub business: BusinessInfo,
    pub slides: Vec<CarouselSlide>,
    pub clock: Arc<dyn Clock>,
    pub sink: Arc<dyn SubmissionSink>,
    pub carousel: CarouselHandle,
    pub bookings: FormRegistry<BookingFlow>,
    pub contacts: FormRegistry<ContactFlow>,
}

impl AppState {
    pub fn new_booking_form(&self) -> BookingFlow {
        BookingFlow::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.clock),
            self.business.primary_phone.clone(),
        )
    }

    pub fn new_contact_form(&self) -> ContactFlow {
        ContactFlow::new(
            Arc::clone(&self.clock),
            self.business.primary_phone.clone(),
        )
    }
}
