//! State for the counter.

use crate::ui::mvi::UiState;

/// Lowest value the counter can hold.
pub const MIN_VALUE: u8 = 0;
/// Highest value the counter can hold.
pub const MAX_VALUE: u8 = 100;

/// Display category derived from the counter value.
///
/// Bands are ordered and closed at the lower end: `[0, 50)`, `[50, 75)`,
/// `[75, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorBand {
    Primary,
    Secondary,
    Tertiary,
}

impl ColorBand {
    const SECONDARY_FROM: u8 = 50;
    const TERTIARY_FROM: u8 = 75;

    pub fn for_value(value: u8) -> Self {
        if value < Self::SECONDARY_FROM {
            ColorBand::Primary
        } else if value < Self::TERTIARY_FROM {
            ColorBand::Secondary
        } else {
            ColorBand::Tertiary
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorBand::Primary => "primary",
            ColorBand::Secondary => "secondary",
            ColorBand::Tertiary => "tertiary",
        }
    }
}

/// The counter value, always within `MIN_VALUE..=MAX_VALUE`.
///
/// The field is private and every constructor clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    value: u8,
}

impl UiState for CounterState {}

impl CounterState {
    /// Build a state from any integer, clamping it into range.
    pub fn clamped(value: i32) -> Self {
        let value = value.clamp(i32::from(MIN_VALUE), i32::from(MAX_VALUE));
        Self { value: value as u8 }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// `value / 100`, in `[0.0, 1.0]`.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(MAX_VALUE)
    }

    pub fn color_band(&self) -> ColorBand {
        ColorBand::for_value(self.value)
    }

    /// Return the state shifted by `delta`, clamped to the range.
    pub fn offset(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.value).saturating_add(delta))
    }
}

/// Immutable view of the counter handed to subscribers after each mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSnapshot {
    pub value: u8,
    pub progress_ratio: f64,
    pub color_band: ColorBand,
}

impl From<CounterState> for CounterSnapshot {
    fn from(state: CounterState) -> Self {
        Self {
            value: state.value(),
            progress_ratio: state.progress_ratio(),
            color_band: state.color_band(),
        }
    }
}

impl Default for CounterSnapshot {
    fn default() -> Self {
        CounterState::default().into()
    }
}
