use crate::error::Error;
use log::*;
use std::{fmt, str::FromStr};
pub mod two_color;

pub use two_color::{interpolate, ColorScaler, COOL, WARM};

/// Scale a value from between vmin and vmax to between 0 and 1.
///
/// Values outside the range are clamped, including values equal to an infinite
/// bound. An empty or inverted range (`vmax <= vmin`) has no meaningful position, so
/// every value lands on the midpoint `0.5`; the same goes for values whose position is
/// NaN.
pub fn normalize_value(value: f64, vmin: f64, vmax: f64) -> f64 {
    if !(vmax > vmin) {
        return 0.5;
    }
    if value <= vmin {
        return 0.0;
    }
    if value >= vmax {
        return 1.0;
    }
    let scaled = (value - vmin) / (vmax - vmin);
    if scaled.is_nan() {
        debug!("No position for {} in {} to {}, using midpoint", value, vmin, vmax);
        0.5
    } else if !(0.0..=1.0).contains(&scaled) {
        debug!("Clamping {} outside of {} to {}", value, vmin, vmax);
        scaled.clamp(0.0, 1.0)
    } else {
        scaled
    }
}

/// Color for a value that is expected to already lie in `[0, 1]`.
pub fn normalized_color_scale(value: f64, reverse: bool) -> String {
    ColorScaler::new(reverse).get_color(normalize_value(value, 0.0, 1.0))
}

/// Color for a value relative to the range `vmin` to `vmax`.
pub fn minmax_color_scale(value: f64, vmin: f64, vmax: f64, reverse: bool) -> String {
    ColorScaler::new(reverse).get_color(normalize_value(value, vmin, vmax))
}

/// How a table's values are placed on the color scale.
///
/// The two scalers color over different scopes: `MinMax` makes every column its own
/// heatmap, `Normalized` treats the whole table as one scale. Pick deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaler {
    /// Per column, between that column's min and max
    MinMax,
    /// Per cell, assuming values already lie in `[0, 1]`
    Normalized,
}

impl Scaler {
    pub const VARIANTS: [&'static str; 2] = ["minmax", "normalized"];

    pub fn name(&self) -> &'static str {
        match self {
            Scaler::MinMax => "minmax",
            Scaler::Normalized => "normalized",
        }
    }
}

impl Default for Scaler {
    fn default() -> Self {
        Scaler::MinMax
    }
}

impl fmt::Display for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scaler {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minmax" => Ok(Scaler::MinMax),
            "normalized" => Ok(Scaler::Normalized),
            other => Err(Error::UnsupportedScaler(other.to_string())),
        }
    }
}
