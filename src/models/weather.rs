use serde::{Deserialize, Serialize};

/// Weather conditions a drive can be logged under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Weather {
    #[default]
    Sunny,
    Raining,
    Snowing,
    Foggy,
}

impl Weather {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Raining => "Raining",
            Weather::Snowing => "Snowing",
            Weather::Foggy => "Foggy",
        }
    }

    /// Helper: convert input name from CLI (lowercase or uppercase)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sunny" => Some(Weather::Sunny),
            "raining" => Some(Weather::Raining),
            "snowing" => Some(Weather::Snowing),
            "foggy" => Some(Weather::Foggy),
            _ => None,
        }
    }

    /// Next condition in the fixed cycle Sunny → Raining → Snowing → Foggy → Sunny.
    pub fn next(self) -> Self {
        match self {
            Weather::Sunny => Weather::Raining,
            Weather::Raining => Weather::Snowing,
            Weather::Snowing => Weather::Foggy,
            Weather::Foggy => Weather::Sunny,
        }
    }
}
