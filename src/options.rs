use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// The two preset groups a session is configured from.  Each group is
/// mutually exclusive within itself; selecting a preset while a session is
/// running resets the session with the new pair.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) speed: Speed,
    pub(crate) size: CellSize,
}

/// Speed preset, mapped to the delay between ticks
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Speed {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Speed {
    /// The fixed delay between one tick's completion and the next tick.
    /// `Hard` is 37.5 ms, hence the microsecond constructor.
    pub(crate) fn tick_interval(self) -> Duration {
        match self {
            Speed::Easy => Duration::from_millis(150),
            Speed::Medium => Duration::from_millis(75),
            Speed::Hard => Duration::from_micros(37_500),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Speed::Easy => "easy",
            Speed::Medium => "medium",
            Speed::Hard => "hard",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Size preset, mapped to the unit size: the edge length of one board cell
/// and the magnitude of one movement step.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CellSize {
    Small,
    #[default]
    Normal,
    Large,
}

impl CellSize {
    pub(crate) fn unit(self) -> i32 {
        match self {
            CellSize::Small => 15,
            CellSize::Normal => 25,
            CellSize::Large => 40,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            CellSize::Small => "small",
            CellSize::Normal => "normal",
            CellSize::Large => "large",
        }
    }
}

impl fmt::Display for CellSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
