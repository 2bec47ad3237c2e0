use serde::Serialize;

/// The fixed presentation icon set services and UI sections point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Icon {
    Droplet,
    Wrench,
    Disc,
    Wind,
    MoveVertical,
    Shield,
    ShieldAlert,
    Lightbulb,
    Cog,
    Clock,
    DollarSign,
}

impl Icon {
    /// Looks up an icon tag. Unknown tags resolve to `None` and render nothing.
    pub fn resolve(tag: &str) -> Option<Icon> {
        match tag {
            "Droplet" => Some(Icon::Droplet),
            "Wrench" => Some(Icon::Wrench),
            // brake service is tagged with the older name
            "CircleStop" | "Disc" => Some(Icon::Disc),
            "Wind" => Some(Icon::Wind),
            "MoveVertical" => Some(Icon::MoveVertical),
            "Shield" => Some(Icon::Shield),
            "ShieldAlert" => Some(Icon::ShieldAlert),
            "Lightbulb" => Some(Icon::Lightbulb),
            "Cog" => Some(Icon::Cog),
            "Clock" => Some(Icon::Clock),
            "DollarSign" => Some(Icon::DollarSign),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Icon::Droplet => "Droplet",
            Icon::Wrench => "Wrench",
            Icon::Disc => "Disc",
            Icon::Wind => "Wind",
            Icon::MoveVertical => "MoveVertical",
            Icon::Shield => "Shield",
            Icon::ShieldAlert => "ShieldAlert",
            Icon::Lightbulb => "Lightbulb",
            Icon::Cog => "Cog",
            Icon::Clock => "Clock",
            Icon::DollarSign => "DollarSign",
        }
    }
}
