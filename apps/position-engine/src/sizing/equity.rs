//! Equity share sizing.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::error::SizingError;
use super::types::SizedPosition;

/// Size an equity position from a risk budget.
///
/// `protective_price` is the stop loss for percentage/fixed methods or the
/// support/resistance level for level-based sizing; the per-share risk is the
/// absolute distance from entry to it.
///
/// # Errors
///
/// Returns `ZeroRiskPerUnit` when the protective price equals the entry price,
/// and `InvalidInput` for a negative risk budget.
pub fn size_equity(
    risk_amount: Decimal,
    entry_price: Decimal,
    protective_price: Decimal,
) -> Result<SizedPosition, SizingError> {
    if risk_amount < Decimal::ZERO {
        return Err(SizingError::InvalidInput(
            "Risk budget cannot be negative".to_string(),
        ));
    }

    let per_share_risk = (entry_price - protective_price).abs();
    if per_share_risk.is_zero() {
        return Err(SizingError::ZeroRiskPerUnit);
    }

    let position_size = (risk_amount / per_share_risk).floor().to_u64().unwrap_or(0);
    let size = Decimal::from(position_size);

    Ok(SizedPosition {
        position_size,
        position_value: size * entry_price,
        estimated_risk: size * per_share_risk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_style_budget() {
        // $200 budget, $3 per-share risk
        let sized = size_equity(dec!(200), dec!(50.00), dec!(47.00)).unwrap();
        assert_eq!(sized.position_size, 66);
        assert_eq!(sized.position_value, dec!(3300.00));
        assert_eq!(sized.estimated_risk, dec!(198.00));
    }

    #[test]
    fn test_exact_division() {
        let sized = size_equity(dec!(200), dec!(50.00), dec!(48.00)).unwrap();
        assert_eq!(sized.position_size, 100);
        assert_eq!(sized.estimated_risk, dec!(200.00));
    }

    #[test]
    fn test_short_direction_distance_is_absolute() {
        // Short: stop above entry
        let sized = size_equity(dec!(200), dec!(50.00), dec!(52.00)).unwrap();
        assert_eq!(sized.position_size, 100);
    }

    #[test]
    fn test_budget_below_one_share_yields_zero() {
        let sized = size_equity(dec!(2), dec!(50.00), dec!(47.00)).unwrap();
        assert_eq!(sized.position_size, 0);
        assert_eq!(sized.position_value, dec!(0));
        assert_eq!(sized.estimated_risk, dec!(0));
    }

    #[test]
    fn test_stop_at_entry_is_degenerate() {
        let err = size_equity(dec!(200), dec!(50.00), dec!(50.00)).unwrap_err();
        assert_eq!(err, SizingError::ZeroRiskPerUnit);
    }

    #[test]
    fn test_negative_budget_rejected() {
        let err = size_equity(dec!(-1), dec!(50.00), dec!(47.00)).unwrap_err();
        assert!(matches!(err, SizingError::InvalidInput(_)));
    }
}
