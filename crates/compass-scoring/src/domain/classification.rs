//! Dimension averages and their High/Low classification.

use std::fmt;
use std::str::FromStr;

use compass_core::error::DomainError;
use serde::{Serialize, Serializer};

use super::questions::Dimension;

/// Averages at or above this value classify as High.
pub const HIGH_THRESHOLD: f64 = 3.5;

/// Mean rating for each dimension, kept at full precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionAverages {
    /// Average of the Purpose questions.
    pub purpose: f64,
    /// Average of the Joy questions.
    pub joy: f64,
    /// Average of the Impact questions.
    pub impact: f64,
    /// Average of the Well-being questions.
    pub well_being: f64,
}

impl DimensionAverages {
    /// Creates averages from values in canonical order.
    #[must_use]
    pub fn new(purpose: f64, joy: f64, impact: f64, well_being: f64) -> Self {
        Self {
            purpose,
            joy,
            impact,
            well_being,
        }
    }

    /// The average for `dimension`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Purpose => self.purpose,
            Dimension::Joy => self.joy,
            Dimension::Impact => self.impact,
            Dimension::WellBeing => self.well_being,
        }
    }
}

/// High or Low standing on a single dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Level {
    /// Average at or above the threshold.
    #[serde(rename = "H")]
    High,
    /// Average below the threshold.
    #[serde(rename = "L")]
    Low,
}

impl Level {
    /// Classifies an average. The threshold is inclusive on the high side.
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= HIGH_THRESHOLD {
            Level::High
        } else {
            Level::Low
        }
    }

    /// `'H'` or `'L'`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Level::High => 'H',
            Level::Low => 'L',
        }
    }
}

/// Four levels in canonical dimension order (Purpose, Joy, Impact,
/// Well-being). Renders as the space-joined lookup code, e.g. `"H L H L"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Classification([Level; 4]);

impl Classification {
    /// Creates a classification from levels in canonical order.
    #[must_use]
    pub fn new(levels: [Level; 4]) -> Self {
        Self(levels)
    }

    /// The level for `dimension`.
    #[must_use]
    pub fn level(&self, dimension: Dimension) -> Level {
        self.0[dimension.index()]
    }

    /// The space-joined code used as the archetype lookup key.
    #[must_use]
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// All sixteen possible classifications, starting at `H H H H` and
    /// ending at `L L L L`.
    pub fn all() -> impl Iterator<Item = Classification> {
        (0u8..16).map(|bits| {
            let mut levels = [Level::High; 4];
            for (position, level) in levels.iter_mut().enumerate() {
                if bits & (0b1000 >> position) != 0 {
                    *level = Level::Low;
                }
            }
            Classification(levels)
        })
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, level) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", level.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Classification {
    type Err = DomainError;

    /// Parses the exact code form: four `H`/`L` letters separated by single
    /// spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || DomainError::UnknownClassification(s.to_owned());

        let mut levels = [Level::High; 4];
        let mut tokens = s.split(' ');
        for level in &mut levels {
            *level = match tokens.next() {
                Some("H") => Level::High,
                Some("L") => Level::Low,
                _ => return Err(unknown()),
            };
        }
        if tokens.next().is_some() {
            return Err(unknown());
        }
        Ok(Classification(levels))
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
