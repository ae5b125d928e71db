//! NDVI classification
//!
//! Three threshold tables map an NDVI value onto labels. Every table is
//! scanned top-down with strict greater-than comparisons, so a value
//! sitting exactly on a bound falls into the band below it.

use serde::{Deserialize, Serialize};

/// Ordered `(lower_bound, value)` bands with a floor for everything below
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable<T: Copy + 'static> {
    bands: &'static [(f64, T)],
    floor: T,
}

impl<T: Copy + 'static> ThresholdTable<T> {
    /// `bands` must be sorted by descending bound
    pub const fn new(bands: &'static [(f64, T)], floor: T) -> Self {
        Self { bands, floor }
    }

    pub fn lookup(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|(bound, _)| value > *bound)
            .map(|(_, band)| *band)
            .unwrap_or(self.floor)
    }
}

/// Four-band vegetation class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NdviClass {
    Poor,
    Moderate,
    Good,
    Excellent,
}

pub const NDVI_CLASS_TABLE: ThresholdTable<NdviClass> = ThresholdTable::new(
    &[
        (0.7, NdviClass::Excellent),
        (0.5, NdviClass::Good),
        (0.3, NdviClass::Moderate),
    ],
    NdviClass::Poor,
);

pub const INTERPRETATION_TABLE: ThresholdTable<&'static str> = ThresholdTable::new(
    &[
        (
            0.7,
            "Very high vegetation density. Likely healthy, dense crops or forest.",
        ),
        (
            0.5,
            "Moderate to high vegetation. Typical of healthy agricultural fields.",
        ),
        (
            0.3,
            "Moderate vegetation. May indicate stress or sparse crop cover.",
        ),
        (
            0.1,
            "Low vegetation. Could be bare soil, senescing crops, or urban areas.",
        ),
    ],
    "Very low or no vegetation. Possibly water, snow, or barren land.",
);

/// Coarse health label used for history entries
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthLabel {
    Good,
    Moderate,
    Poor,
}

pub const HEALTH_TABLE: ThresholdTable<HealthLabel> = ThresholdTable::new(
    &[(0.5, HealthLabel::Good), (0.3, HealthLabel::Moderate)],
    HealthLabel::Poor,
);

impl NdviClass {
    pub fn color(&self) -> &'static str {
        match self {
            NdviClass::Excellent => "#00ff00",
            NdviClass::Good => "#aaff00",
            NdviClass::Moderate => "#ffff00",
            NdviClass::Poor => "#ff0000",
        }
    }

    /// Status label shown to farmers, emoji included
    pub fn label(&self) -> &'static str {
        match self {
            NdviClass::Excellent => "Excellent 🌿",
            NdviClass::Good => "Good ✅",
            NdviClass::Moderate => "Moderate ⚠️",
            NdviClass::Poor => "Poor ❌",
        }
    }

    /// Advisory strings for a field in this class, most urgent first
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            NdviClass::Excellent => &[
                "Excellent crop health! Maintain current practices.",
                "Optimal growth conditions detected.",
                "Consider harvesting in 2-3 weeks.",
                "Monitor soil moisture for consistency.",
            ],
            NdviClass::Good => &[
                "Good vegetation health observed.",
                "Consider light fertilization in 10-14 days.",
                "Maintain current irrigation schedule.",
                "Check for early signs of pest activity.",
            ],
            NdviClass::Moderate => &[
                "Moderate stress detected in some areas.",
                "Increase irrigation frequency by 20%.",
                "Test soil for nutrient deficiencies.",
                "Consider adding organic compost.",
            ],
            NdviClass::Poor => &[
                "⚠️ Immediate attention required!",
                "Severe vegetation stress detected.",
                "Increase irrigation immediately.",
                "Conduct comprehensive soil testing.",
                "Consult agricultural expert if condition persists.",
            ],
        }
    }
}

impl std::fmt::Display for NdviClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthLabel::Good => write!(f, "Good"),
            HealthLabel::Moderate => write!(f, "Moderate"),
            HealthLabel::Poor => write!(f, "Poor"),
        }
    }
}

/// Color, status label and class tag for an NDVI value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NdviClassification {
    pub color: &'static str,
    pub status: &'static str,
    pub class: NdviClass,
}

pub fn classify_ndvi(value: f64) -> NdviClassification {
    let class = NDVI_CLASS_TABLE.lookup(value);
    NdviClassification {
        color: class.color(),
        status: class.label(),
        class,
    }
}

/// Free-text reading of an NDVI value (five bands)
pub fn interpret_ndvi(value: f64) -> &'static str {
    INTERPRETATION_TABLE.lookup(value)
}

/// Health label for a history sample (three bands)
pub fn classify_health(value: f64) -> HealthLabel {
    HEALTH_TABLE.lookup(value)
}

/// Lowest reported NDVI around a field mean
pub const MIN_NDVI_FLOOR: f64 = 0.1;
/// Highest reported NDVI around a field mean
pub const MAX_NDVI_CEILING: f64 = 1.0;

/// Derived `(min, max)` spread around a mean, clamped to `[0.1, 1.0]`
pub fn ndvi_spread(mean: f64) -> (f64, f64) {
    (
        (mean - 0.2).max(MIN_NDVI_FLOOR),
        (mean + 0.15).min(MAX_NDVI_CEILING),
    )
}
