// Event color palette
// Events are drawn from a fixed set of six colors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
    Pink,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not one of the palette colors")]
pub struct UnknownColor(pub String);

impl EventColor {
    pub const ALL: [EventColor; 6] = [
        EventColor::Blue,
        EventColor::Green,
        EventColor::Red,
        EventColor::Yellow,
        EventColor::Purple,
        EventColor::Pink,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Blue => "blue",
            EventColor::Green => "green",
            EventColor::Red => "red",
            EventColor::Yellow => "yellow",
            EventColor::Purple => "purple",
            EventColor::Pink => "pink",
        }
    }

    /// Hex swatch used by renderers (`#RRGGBB`).
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Blue => "#3B82F6",
            EventColor::Green => "#10B981",
            EventColor::Red => "#EF4444",
            EventColor::Yellow => "#F59E0B",
            EventColor::Purple => "#8B5CF6",
            EventColor::Pink => "#EC4899",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventColor {
    type Err = UnknownColor;

    /// Accepts a palette name or its hex swatch, case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        EventColor::ALL
            .into_iter()
            .find(|color| {
                trimmed.eq_ignore_ascii_case(color.name()) || trimmed.eq_ignore_ascii_case(color.hex())
            })
            .ok_or_else(|| UnknownColor(value.to_string()))
    }
}
