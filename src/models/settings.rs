use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};

/// Scales used to normalise the performance radar onto `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsSettings {
    pub profit_factor_cap: f64, // Profit factor that maps to a full score
    pub risk_ceiling: f64,      // Average risk % that maps to a zero score
    pub pnl_band: f64,          // P&L of -band..+band maps linearly onto 0..1
}

impl Default for StatsSettings {
    fn default() -> Self {
        Self {
            profit_factor_cap: 3.0,
            risk_ceiling: 5.0,
            pnl_band: 10.0,
        }
    }
}

impl StatsSettings {
    /// Read settings from a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: StatsSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("profit_factor_cap", self.profit_factor_cap),
            ("risk_ceiling", self.risk_ceiling),
            ("pnl_band", self.pnl_band),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(JournalError::InvalidSetting { field, value });
            }
        }
        Ok(())
    }
}
