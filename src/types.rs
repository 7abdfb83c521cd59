use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRequest {
    pub amount: f64,
    pub denominations: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinBreakdownEntry {
    pub denomination: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeResult {
    pub coins: Vec<CoinBreakdownEntry>,
    #[serde(rename = "totalCoins")]
    pub total_coins: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceError {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidDenominationsResponse {
    pub denominations: Vec<f64>,
}

/// Outcome of the most recent health probe. Fresh per probe; never carried
/// over from a previous probe or a previous base URL.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionState {
    Checking,
    Connected,
    Disconnected(String),
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Checking => write!(f, "checking"),
            ConnectionState::Connected => write!(f, "connected"),
            ConnectionState::Disconnected(reason) => write!(f, "disconnected ({})", reason),
        }
    }
}

#[derive(Tabled)]
pub struct BreakdownTableRow {
    pub denomination: String,
    pub count: u64,
}

#[derive(Tabled)]
pub struct DenominationTableRow {
    pub denomination: String,
    pub selected: String,
}
