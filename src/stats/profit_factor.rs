use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const UNBOUNDED_LABEL: &str = "Infinity";

/// Gross profit divided by gross loss.
///
/// A day with no losing P&L has no finite ratio; that case is carried as
/// [`ProfitFactor::Unbounded`] rather than as a float so callers can't sort or
/// average it by accident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProfitFactor {
    Finite(f64),
    Unbounded,
}

impl ProfitFactor {
    /// `gross_loss` is the magnitude of the summed losing P&L.
    pub fn from_gross(gross_profit: f64, gross_loss: f64) -> Self {
        if gross_loss == 0.0 {
            ProfitFactor::Unbounded
        } else {
            ProfitFactor::Finite(gross_profit / gross_loss)
        }
    }

    /// The ratio as a float, `f64::INFINITY` when unbounded.
    pub fn value(&self) -> f64 {
        match self {
            ProfitFactor::Finite(value) => *value,
            ProfitFactor::Unbounded => f64::INFINITY,
        }
    }

    pub fn finite(&self) -> Option<f64> {
        match self {
            ProfitFactor::Finite(value) => Some(*value),
            ProfitFactor::Unbounded => None,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, ProfitFactor::Unbounded)
    }
}

impl fmt::Display for ProfitFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfitFactor::Finite(value) => write!(f, "{:.2}", value),
            ProfitFactor::Unbounded => f.write_str("∞"),
        }
    }
}

// JSON has no infinity, so the unbounded case travels as a string
impl Serialize for ProfitFactor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ProfitFactor::Finite(value) => serializer.serialize_f64(*value),
            ProfitFactor::Unbounded => serializer.serialize_str(UNBOUNDED_LABEL),
        }
    }
}

impl<'de> Deserialize<'de> for ProfitFactor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Label(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) if value.is_finite() => Ok(ProfitFactor::Finite(value)),
            Raw::Number(_) => Ok(ProfitFactor::Unbounded),
            Raw::Label(label) if label == UNBOUNDED_LABEL => Ok(ProfitFactor::Unbounded),
            Raw::Label(label) => Err(serde::de::Error::custom(format!(
                "invalid profit factor: {}",
                label
            ))),
        }
    }
}
