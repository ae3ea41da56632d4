//! Human-readable measurements.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


//------------ UnitLabels ----------------------------------------------------

/// The unit names appended to formatted measurements.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct UnitLabels {
    pub square_meters: String,
    pub square_kilometers: String,
    pub meters: String,
    pub kilometers: String,
}

impl UnitLabels {
    /// Returns the metric unit symbols.
    pub fn metric() -> Self {
        UnitLabels {
            square_meters: "m²".into(),
            square_kilometers: "km²".into(),
            meters: "m".into(),
            kilometers: "km".into(),
        }
    }

    /// Returns Chinese unit names.
    pub fn zh() -> Self {
        UnitLabels {
            square_meters: "平方米".into(),
            square_kilometers: "平方公里".into(),
            meters: "米".into(),
            kilometers: "千米".into(),
        }
    }
}

impl Default for UnitLabels {
    fn default() -> Self {
        Self::metric()
    }
}


//------------ Formatting ----------------------------------------------------

/// Formats an area given in square metres with metric symbols.
pub fn format_area(square_meters: f64) -> String {
    format_area_with(square_meters, &UnitLabels::metric())
}

/// Formats an area given in square metres.
///
/// Below one hectare, the area is given in square metres with one decimal.
/// Below one square kilometre, it is given in square kilometres with two
/// decimals, and above that with one.
pub fn format_area_with(square_meters: f64, labels: &UnitLabels) -> String {
    if square_meters < 10_000. {
        format!("{:.1} {}", square_meters, labels.square_meters)
    }
    else if square_meters < 1_000_000. {
        format!(
            "{:.2} {}", square_meters / 1_000_000., labels.square_kilometers
        )
    }
    else {
        format!(
            "{:.1} {}", square_meters / 1_000_000., labels.square_kilometers
        )
    }
}

/// Formats a length given in metres with metric symbols.
pub fn format_length(meters: f64) -> String {
    format_length_with(meters, &UnitLabels::metric())
}

/// Formats a length given in metres.
///
/// Below one kilometre, the length is given in metres with one decimal,
/// otherwise in kilometres with two.
pub fn format_length_with(meters: f64, labels: &UnitLabels) -> String {
    if meters < 1000. {
        format!("{:.1} {}", meters, labels.meters)
    }
    else {
        format!("{:.2} {}", meters / 1000., labels.kilometers)
    }
}


//============ Tests =========================================================
