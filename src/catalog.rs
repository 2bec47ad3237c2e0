use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub estimated_duration: u32,
    pub icon: String,
    #[serde(default)]
    pub popular: bool,
}

impl Service {
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Parse(String),

    #[error("service with empty id")]
    EmptyId,

    #[error("duplicate service id: {0}")]
    DuplicateId(String),

    #[error("service {0} has zero estimated duration")]
    ZeroDuration(String),

    #[error("service {id} has invalid price {price}")]
    InvalidPrice { id: String, price: Decimal },
}

/// Read-only list of offered services, built once and shared by reference.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for service in &services {
            if service.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateId(service.id.clone()));
            }
            if service.estimated_duration == 0 {
                return Err(CatalogError::ZeroDuration(service.id.clone()));
            }
            if service.price.is_sign_negative() || service.price.scale() > 2 {
                return Err(CatalogError::InvalidPrice {
                    id: service.id.clone(),
                    price: service.price,
                });
            }
        }
        Ok(Self { services })
    }

    pub fn from_json(s: &str) -> Result<Self, CatalogError> {
        let services: Vec<Service> =
            serde_json::from_str(s).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(services)
    }

    pub fn shipped() -> Self {
        Self {
            services: shipped_services(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    pub fn popular(&self) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(|s| s.popular)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessInfo {
    pub name: String,
    pub tagline: String,
    pub primary_phone: String,
    pub secondary_phone: String,
    pub email: String,
}

impl BusinessInfo {
    pub fn shipped() -> Self {
        Self {
            name: "Call REGI Auto Repair".to_string(),
            tagline: "Expert Auto Care You Can Trust".to_string(),
            primary_phone: "786-681-2854".to_string(),
            secondary_phone: "786-823-1162".to_string(),
            email: "info@regiautorepair.com".to_string(),
        }
    }
}

fn service(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    minutes: u32,
    icon: &str,
    popular: bool,
) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Decimal::new(cents, 2),
        estimated_duration: minutes,
        icon: icon.to_string(),
        popular,
    }
}

fn shipped_services() -> Vec<Service> {
    vec![
        service(
            "oil-change",
            "Oil Change",
            "Complete oil change service with filter replacement and multi-point inspection",
            4999,
            30,
            "Droplet",
            true,
        ),
        service(
            "tune-up",
            "Engine Tune-Up",
            "Comprehensive engine tune-up to optimize performance and fuel efficiency",
            14999,
            90,
            "Wrench",
            true,
        ),
        service(
            "brake-service",
            "Brake Service",
            "Complete brake inspection, pad replacement, and rotor resurfacing",
            19999,
            120,
            "CircleStop",
            false,
        ),
        service(
            "ac-compressor",
            "AC Compressor",
            "AC system diagnosis, repair, and refrigerant recharge",
            29999,
            180,
            "Wind",
            false,
        ),
        service(
            "suspension",
            "Suspension Repair",
            "Suspension system inspection and repair for a smooth ride",
            24999,
            150,
            "MoveVertical",
            false,
        ),
        service(
            "abs-repair",
            "ABS System",
            "Anti-lock brake system diagnostics and repair",
            17999,
            120,
            "Shield",
            false,
        ),
        service(
            "bumper-replacement",
            "Bumper Replacement",
            "Professional bumper repair and replacement service",
            39999,
            240,
            "ShieldAlert",
            false,
        ),
        service(
            "headlight-service",
            "Headlight Service",
            "Headlight restoration, alignment, and replacement",
            8999,
            60,
            "Lightbulb",
            false,
        ),
        service(
            "engine-repair",
            "Engine Repair",
            "Complete engine diagnostics and repair services",
            59999,
            360,
            "Cog",
            true,
        ),
    ]
}
