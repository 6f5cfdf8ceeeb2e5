//! Portfolio summary aggregation.

use crate::position::Position;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Portfolio-level metrics derived from a set of positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Total quantity held, in tonnes.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_tonnes: Decimal,
    /// Total value: sum of tonnes * price per tonne.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    /// Quantity-weighted average unit price. Zero when the portfolio holds
    /// no tonnes.
    #[serde(with = "rust_decimal::serde::float")]
    pub average_price_per_tonne: Decimal,
}

/// Reduces a set of positions to portfolio totals and the weighted average
/// unit price.
///
/// Pure single-pass fold: no I/O, no shared state, a fresh summary per call.
/// Zero-tonne positions contribute nothing to either total, so they carry no
/// weight in the average. An empty or all-zero input yields an all-zero
/// summary rather than a division error.
#[must_use]
pub fn compute_summary(positions: &[Position]) -> PortfolioSummary {
    let mut total_tonnes = Decimal::ZERO;
    let mut total_value = Decimal::ZERO;

    for position in positions {
        total_tonnes += position.tonnes;
        total_value += position.tonnes * position.price_per_tonne;
    }

    let average_price_per_tonne = if total_tonnes > Decimal::ZERO {
        total_value / total_tonnes
    } else {
        Decimal::ZERO
    };

    PortfolioSummary {
        total_tonnes,
        total_value,
        average_price_per_tonne,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PositionStatus;
    use rust_decimal_macros::dec;

    fn position(id: &str, tonnes: Decimal, price: Decimal) -> Position {
        Position {
            id: id.to_string(),
            project_name: format!("Project {id}"),
            tonnes,
            price_per_tonne: price,
            status: PositionStatus::Available,
            vintage: 2023,
        }
    }

    #[test]
    fn empty_input_yields_all_zeros() {
        let summary = compute_summary(&[]);
        assert_eq!(summary.total_tonnes, Decimal::ZERO);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.average_price_per_tonne, Decimal::ZERO);
    }

    #[test]
    fn single_position_totals() {
        let summary = compute_summary(&[position("1", dec!(100), dec!(25))]);
        assert_eq!(summary.total_tonnes, dec!(100));
        assert_eq!(summary.total_value, dec!(2500));
        assert_eq!(summary.average_price_per_tonne, dec!(25));
    }

    #[test]
    fn weighted_average_over_multiple_positions() {
        let summary = compute_summary(&[
            position("1", dec!(1000), dec!(20)),
            position("2", dec!(100), dec!(30)),
        ]);

        assert_eq!(summary.total_tonnes, dec!(1100));
        assert_eq!(summary.total_value, dec!(23000));
        // 23000 / 1100 = 20.909090..., checked to 2 decimal places
        let diff = (summary.average_price_per_tonne - dec!(20.909)).abs();
        assert!(diff < dec!(0.01), "got {}", summary.average_price_per_tonne);
    }

    #[test]
    fn zero_tonne_position_has_no_effect() {
        let summary = compute_summary(&[
            position("1", dec!(100), dec!(25)),
            position("2", dec!(0), dec!(30)),
        ]);

        assert_eq!(summary.total_tonnes, dec!(100));
        assert_eq!(summary.total_value, dec!(2500));
        assert_eq!(summary.average_price_per_tonne, dec!(25));
    }

    #[test]
    fn all_zero_tonnes_guards_the_division() {
        let summary = compute_summary(&[
            position("1", dec!(0), dec!(30)),
            position("2", dec!(0), dec!(999)),
        ]);

        assert_eq!(summary.total_tonnes, Decimal::ZERO);
        assert_eq!(summary.total_value, Decimal::ZERO);
        assert_eq!(summary.average_price_per_tonne, Decimal::ZERO);
    }

    #[test]
    fn summary_is_order_independent() {
        let a = position("1", dec!(100), dec!(20));
        let b = position("2", dec!(200), dec!(30));
        let c = position("3", dec!(50), dec!(40));

        let forward = compute_summary(&[a.clone(), b.clone(), c.clone()]);
        let reversed = compute_summary(&[c, b, a]);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn duplicate_ids_are_summed_separately() {
        let summary = compute_summary(&[
            position("1", dec!(10), dec!(5)),
            position("1", dec!(10), dec!(5)),
        ]);

        assert_eq!(summary.total_tonnes, dec!(20));
        assert_eq!(summary.total_value, dec!(100));
    }

    #[test]
    fn input_is_not_mutated() {
        let positions = vec![
            position("1", dec!(100), dec!(25)),
            position("2", dec!(50), dec!(10)),
        ];
        let before = positions.clone();

        let _ = compute_summary(&positions);

        assert_eq!(positions, before);
    }

    #[test]
    fn summary_serializes_camel_case_numbers() {
        let summary = compute_summary(&[position("1", dec!(100), dec!(25))]);
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["totalTonnes"], 100.0);
        assert_eq!(value["totalValue"], 2500.0);
        assert_eq!(value["averagePricePerTonne"], 25.0);
    }
}
