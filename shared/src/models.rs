use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entity::stocks::StockStatus;

/// Incoming payload for adding a stock to the watchlist. `added_date` and
/// `status` are server-assigned and never accepted from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockPayload {
    pub symbol: String,
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub entry_price: Option<Decimal>,
    pub target_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub risk_reward_ratio: Option<String>,
    pub technical_signal: Option<String>,
    pub reasoning: Option<String>,
}

/// Partial update for an existing stock. The field set is the allow-list of
/// mutable columns: unknown keys are dropped at deserialization, and
/// `id`/`symbol`/`added_date` have no field here so they can never be
/// addressed by an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockUpdate {
    pub company_name: Option<String>,
    pub sector: Option<String>,
    pub entry_price: Option<Decimal>,
    pub target_price: Option<Decimal>,
    pub stop_loss: Option<Decimal>,
    pub risk_reward_ratio: Option<String>,
    pub technical_signal: Option<String>,
    pub reasoning: Option<String>,
    pub status: Option<StockStatus>,
}

impl StockUpdate {
    /// True when no recognized field was supplied, in which case the update
    /// is a no-op.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.sector.is_none()
            && self.entry_price.is_none()
            && self.target_price.is_none()
            && self.stop_loss.is_none()
            && self.risk_reward_ratio.is_none()
            && self.technical_signal.is_none()
            && self.reasoning.is_none()
            && self.status.is_none()
    }
}
