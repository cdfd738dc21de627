use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

/// Value Object - time-of-day text shown on the X axis (`HH:MM:SS`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - Up/Down classification of a price move
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Direction {
    #[strum(serialize = "up")]
    #[serde(rename = "up")]
    Up,
    #[strum(serialize = "down")]
    #[serde(rename = "down")]
    Down,
}

impl Direction {
    /// The one sign convention used everywhere: ties count as `Up`.
    ///
    /// Metrics, the overlay callout and per-point coloring all route through
    /// here; a missing previous sample must be passed as `current`.
    pub fn between(current: f64, previous: f64) -> Self {
        if current >= previous { Direction::Up } else { Direction::Down }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Direction::Up)
    }
}
