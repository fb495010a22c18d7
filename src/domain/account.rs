use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Full account record as served by the upstream bank data service.
///
/// Field names follow the upstream JSON wire format. The record is owned and
/// mutated exclusively by the upstream service; this crate only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: String,
    pub owner_name: String,
    pub balance: Decimal,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Error)]
pub enum BankDataError {
    #[error("upstream bank data service returned status {0}")]
    UpstreamStatus(u16),
    #[error("could not reach bank data service: {0}")]
    Connection(String),
    #[error("failed to decode bank data response: {0}")]
    Decode(String),
}
