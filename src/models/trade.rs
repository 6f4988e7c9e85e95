use serde::{Deserialize, Serialize};

use crate::percent::{parse_percent, percent_value};

/// How a trade ended, as marked by the trader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeOutcome {
    Win,
    Loss,
    #[default]
    Pending,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TradeRecord")]
pub struct Trade {
    pub risk_percentage: String, // Free text, parsed on demand
    pub pnl: String,             // Empty while the trade is still open
    pub outcome: TradeOutcome,
}

impl Trade {
    pub fn new(
        risk_percentage: impl Into<String>,
        pnl: impl Into<String>,
        outcome: TradeOutcome,
    ) -> Self {
        Self {
            risk_percentage: risk_percentage.into(),
            pnl: pnl.into(),
            outcome,
        }
    }

    pub fn is_win(&self) -> bool {
        self.outcome == TradeOutcome::Win
    }

    pub fn is_loss(&self) -> bool {
        self.outcome == TradeOutcome::Loss
    }

    /// P&L percent, `0` when the field is empty or not numeric
    pub fn pnl_value(&self) -> f64 {
        parse_percent(&self.pnl)
    }

    /// Risk percent, `0` when the field is empty or not numeric
    pub fn risk_value(&self) -> f64 {
        parse_percent(&self.risk_percentage)
    }

    /// P&L percent, `None` when the field does not parse
    pub fn parsed_pnl(&self) -> Option<f64> {
        percent_value(&self.pnl)
    }

    /// Checkbox semantics: marking a win clears a loss, marking it again clears the win.
    pub fn toggle_win(&mut self) {
        self.outcome = match self.outcome {
            TradeOutcome::Win => TradeOutcome::Pending,
            _ => TradeOutcome::Win,
        };
    }

    pub fn toggle_loss(&mut self) {
        self.outcome = match self.outcome {
            TradeOutcome::Loss => TradeOutcome::Pending,
            _ => TradeOutcome::Loss,
        };
    }
}

/// Wire shape accepted on input: either an explicit `outcome`, or the
/// `isWin`/`isLoss` checkbox pair older exports carry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TradeRecord {
    #[serde(default)]
    risk_percentage: String,
    #[serde(default)]
    pnl: String,
    #[serde(default)]
    outcome: Option<TradeOutcome>,
    #[serde(default)]
    is_win: bool,
    #[serde(default)]
    is_loss: bool,
}

impl TryFrom<TradeRecord> for Trade {
    type Error = String;

    fn try_from(record: TradeRecord) -> Result<Self, Self::Error> {
        let outcome = match (record.outcome, record.is_win, record.is_loss) {
            (Some(outcome), _, _) => outcome,
            (None, true, true) => {
                return Err("trade cannot be both a win and a loss".to_string());
            }
            (None, true, false) => TradeOutcome::Win,
            (None, false, true) => TradeOutcome::Loss,
            (None, false, false) => TradeOutcome::Pending,
        };

        Ok(Trade {
            risk_percentage: record.risk_percentage,
            pnl: record.pnl,
            outcome,
        })
    }
}
