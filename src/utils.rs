use std::{fmt, str::FromStr, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::error::ChangeError;

/// Upper bound on a change request amount, in cents (10000.00).
pub const MAX_AMOUNT_CENTS: u64 = 1_000_000;

/// The fixed catalog of denominations a selection is drawn from, ascending.
pub const DENOMINATION_CATALOG: [Denomination; 12] = [
    Denomination::from_cents(1),
    Denomination::from_cents(5),
    Denomination::from_cents(10),
    Denomination::from_cents(20),
    Denomination::from_cents(50),
    Denomination::from_cents(100),
    Denomination::from_cents(200),
    Denomination::from_cents(500),
    Denomination::from_cents(1_000),
    Denomination::from_cents(5_000),
    Denomination::from_cents(10_000),
    Denomination::from_cents(100_000),
];

/// A coin or bill face value in integer cents. Ordering and equality are
/// exact; conversion to `f64` happens only at the JSON boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denomination(u64);

impl Denomination {
    pub const fn from_cents(cents: u64) -> Self {
        Denomination(cents)
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn major_units(self) -> f64 {
        cents_to_major(self.0)
    }

    pub fn in_catalog(self) -> bool {
        DENOMINATION_CATALOG.binary_search(&self).is_ok()
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_cents(self.0))
    }
}

impl FromStr for Denomination {
    type Err = ChangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let cents = parse_cents(input).ok_or_else(|| {
            ChangeError::validation(format!("'{}' is not a valid monetary value", input.trim()))
        })?;
        if cents == 0 {
            return Err(ChangeError::validation(
                "denominations must be greater than zero",
            ));
        }
        Ok(Denomination(cents))
    }
}

/// Parses a denomination argument and checks it against the catalog. Used as
/// a clap value parser so bad values are rejected before any command runs.
pub fn parse_denomination(input: &str) -> Result<Denomination, String> {
    let denomination = input.parse::<Denomination>().map_err(|e| e.to_string())?;
    if !denomination.in_catalog() {
        return Err(format!(
            "'{}' is not in the denomination catalog ({})",
            input.trim(),
            join_denominations(&DENOMINATION_CATALOG)
        ));
    }
    Ok(denomination)
}

/// Validates a free-form amount string and returns it in cents.
///
/// Rejects empty, non-numeric and negative input, more than two decimal
/// places, and amounts above 10000.00.
pub fn parse_amount(input: &str) -> Result<u64, ChangeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChangeError::validation("an amount is required"));
    }

    if let Some(rest) = trimmed.strip_prefix('-') {
        if parse_cents(rest).is_some() {
            return Err(ChangeError::validation("the amount cannot be negative"));
        }
    }

    let cents = parse_cents(trimmed).ok_or_else(|| {
        ChangeError::validation(format!(
            "'{}' is not a valid amount; use digits with at most two decimal places",
            trimmed
        ))
    })?;

    if cents > MAX_AMOUNT_CENTS {
        return Err(ChangeError::validation(format!(
            "the amount cannot exceed {}",
            format_cents(MAX_AMOUNT_CENTS)
        )));
    }

    Ok(cents)
}

pub fn format_cents(cents: u64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

pub fn cents_to_major(cents: u64) -> f64 {
    cents as f64 / 100.0
}

pub fn join_denominations(denominations: &[Denomination]) -> String {
    denominations
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// "0.5" and ".5" mean 50 cents; more than two fraction digits is rejected
// rather than rounded.
fn parse_cents(input: &str) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }
    if fraction.len() > 2 {
        return None;
    }

    let whole_value: u64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };
    let fraction_value: u64 = if fraction.is_empty() {
        0
    } else {
        format!("{:0<2}", fraction).parse().ok()?
    };

    whole_value
        .checked_mul(100)?
        .checked_add(fraction_value)
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
