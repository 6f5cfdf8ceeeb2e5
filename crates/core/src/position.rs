//! Carbon credit position model.
//!
//! A position is one holding: a quantity of tonnes bought at a unit price,
//! tagged with a lifecycle status. Aggregation only reads `tonnes` and
//! `price_per_tonne`; everything else is descriptive metadata or filter
//! input for the query layer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single carbon credit holding.
///
/// Field names are camelCase on the wire to match the frontend payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Opaque unique identifier. Carries no aggregation semantics; duplicate
    /// ids are summed as separate entries.
    pub id: String,
    /// Display label for the originating project.
    pub project_name: String,
    /// Quantity held, in tonnes of CO2e. Zero is valid and contributes
    /// nothing to the totals.
    #[serde(with = "rust_decimal::serde::float")]
    pub tonnes: Decimal,
    /// Unit price in USD per tonne.
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_tonne: Decimal,
    /// Lifecycle status, used by the query layer's filter.
    pub status: PositionStatus,
    /// Vintage year of the credits.
    pub vintage: i32,
}

/// Lifecycle status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Available,
    Retired,
}

impl PositionStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Retired => "retired",
        }
    }
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "retired" => Ok(Self::Retired),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Status filter accepted by the query layer.
///
/// Modeled as a closed enum rather than a free string so an invalid filter
/// value is rejected at the boundary instead of silently matching nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// No filtering; the full position set.
    #[default]
    All,
    Available,
    Retired,
}

impl StatusFilter {
    /// Whether a position with the given status passes this filter.
    #[must_use]
    pub const fn matches(&self, status: PositionStatus) -> bool {
        match self {
            Self::All => true,
            Self::Available => matches!(status, PositionStatus::Available),
            Self::Retired => matches!(status, PositionStatus::Retired),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Available => "available",
            Self::Retired => "retired",
        })
    }
}

impl FromStr for StatusFilter {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "available" => Ok(Self::Available),
            "retired" => Ok(Self::Retired),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// Unrecognized status or filter string.
#[derive(Error, Debug)]
#[error("unrecognized status value: {0}")]
pub struct StatusParseError(pub String);
