use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CarouselSlide {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub cta: CallToAction,
}

fn slide(
    id: u32,
    title: &str,
    subtitle: &str,
    description: &str,
    image: &str,
    cta: (&str, &str),
) -> CarouselSlide {
    CarouselSlide {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        cta: CallToAction {
            text: cta.0.to_string(),
            link: cta.1.to_string(),
        },
    }
}

/// The hero slides in display order.
pub fn shipped() -> Vec<CarouselSlide> {
    vec![
        slide(
            1,
            "Expert Oil Changes",
            "Keep Your Engine Running Smooth",
            "Professional oil change service with multi-point inspection included",
            "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=1920",
            ("Book Now", "#booking"),
        ),
        slide(
            2,
            "Brake & Suspension Specialists",
            "Safety First, Always",
            "Complete brake system service and suspension repair by certified technicians",
            "https://images.unsplash.com/photo-1625047509168-a7026f36de04?w=1920",
            ("Schedule Service", "#booking"),
        ),
        slide(
            3,
            "Engine Repair & Diagnostics",
            "Advanced Technology Meets Expert Care",
            "State-of-the-art diagnostics and comprehensive engine repair services",
            "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=1920",
            ("Get Quote", "#contact"),
        ),
        slide(
            4,
            "AC & Electrical Services",
            "Stay Cool & Powered",
            "Complete AC system service and electrical diagnostics and repair",
            "https://images.unsplash.com/photo-1619642751034-765dfdf7c58e?w=1920",
            ("Learn More", "#services"),
        ),
        slide(
            5,
            "Call Today!",
            "Your Trusted Auto Repair Partner",
            "Same-day service available • Free estimates • Quality guaranteed",
            "https://images.unsplash.com/photo-1487754180451-c456f719a1fc?w=1920",
            ("Contact Us", "#contact"),
        ),
    ]
}
