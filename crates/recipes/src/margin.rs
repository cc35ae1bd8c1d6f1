//! Gross-margin configuration.

use serde::{Deserialize, Serialize};

use barkeep_core::{DomainError, DomainResult, ValueObject};

/// Margin applied when no margin is configured.
pub const DEFAULT_MARGIN_PERCENT: f64 = 82.0;

/// Gross-margin percentage used to derive a selling price from cost.
///
/// `cost / price = 1 - margin / 100`. Valid margins are finite and within
/// `[0, 100)`: a margin of 100 or more has no finite price, so it is rejected
/// when the value is built rather than clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Margin(f64);

impl Margin {
    pub fn new(percent: f64) -> DomainResult<Self> {
        if !percent.is_finite() {
            return Err(DomainError::validation("margin must be a finite number"));
        }
        if percent < 0.0 {
            return Err(DomainError::validation("margin cannot be negative"));
        }
        if percent >= 100.0 {
            return Err(DomainError::validation(format!(
                "margin must be below 100% (got {percent})"
            )));
        }
        Ok(Self(percent))
    }

    /// Build from an optional setting: absent means the default, an explicit
    /// value (including 0) is honored.
    pub fn from_setting(percent: Option<f64>) -> DomainResult<Self> {
        match percent {
            Some(p) => Self::new(p),
            None => Ok(Self::default()),
        }
    }

    pub fn percent(&self) -> f64 {
        self.0
    }

    /// Share of the selling price that is material cost (`1 - margin/100`).
    pub fn cost_ratio(&self) -> f64 {
        1.0 - self.0 / 100.0
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self(DEFAULT_MARGIN_PERCENT)
    }
}

impl ValueObject for Margin {}

impl TryFrom<f64> for Margin {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Margin> for f64 {
    fn from(value: Margin) -> Self {
        value.0
    }
}

/// Pricing settings passed explicitly to the calculator and managers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub margin: Margin,
}

impl PricingConfig {
    pub fn new(margin: Margin) -> Self {
        Self { margin }
    }
}
