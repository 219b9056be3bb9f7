//! Module `risk::pnl`.
//!
//! Profit-and-loss arithmetic for single-option positions: signed P&L from
//! entry and current premiums, and an entry-cost/breakeven summary for long
//! positions with a lognormal probability-of-profit estimate.
//!
//! The side of a position is a closed enum rather than a free-form string, so
//! an unrecognized side is unrepresentable and the only failure mode left is
//! malformed numeric input.

use serde::{Deserialize, Serialize};

use crate::core::{OptionType, PricingError};
use crate::math::normal_cdf;

/// Shares represented by one listed equity option contract.
pub const CONTRACT_MULTIPLIER: f64 = 100.0;

/// Direction of an option position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionSide {
    /// Premium paid at entry; gains when the option appreciates.
    Long,
    /// Premium received at entry; gains when the option decays.
    Short,
}

impl PositionSide {
    /// Returns +1.0 for long and -1.0 for short.
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }
}

/// Signed P&L of an option position.
///
/// `entry_premium` and `current_premium` are per-share option prices;
/// `contracts` scales by position size and [`CONTRACT_MULTIPLIER`] converts
/// to shares. Long positions gain when the premium rises, short positions
/// mirror.
///
/// # Examples
/// ```
/// use lattice_options::risk::{position_pnl, PositionSide};
///
/// let long = position_pnl(PositionSide::Long, 3.0, 4.5, 2);
/// let short = position_pnl(PositionSide::Short, 3.0, 4.5, 2);
/// assert_eq!(long, 300.0);
/// assert_eq!(short, -300.0);
/// ```
pub fn position_pnl(
    side: PositionSide,
    entry_premium: f64,
    current_premium: f64,
    contracts: u32,
) -> f64 {
    side.sign() * (current_premium - entry_premium) * contracts as f64 * CONTRACT_MULTIPLIER
}

/// Entry economics of a long option position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LongPositionSummary {
    /// Premium paid at entry, in currency.
    pub entry_cost: f64,
    /// Worst-case loss; for a long option this equals the entry cost.
    pub max_risk: f64,
    /// Underlying level at expiry where the position breaks even.
    pub breakeven: f64,
    /// Lognormal estimate of finishing past breakeven; `None` when the
    /// estimate is unavailable (zero expiry, zero volatility, or a
    /// degenerate breakeven/spot).
    pub probability_of_profit: Option<f64>,
}

/// Summarizes a long call or put position entered at `premium` per share.
///
/// The probability of profit treats the underlying as lognormal with drift
/// `rate` and volatility `vol`, and measures the chance of expiring beyond
/// the breakeven: `N(d2)` with breakeven in place of the strike for calls,
/// `N(-d2)` for puts.
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] when `premium`, `strike`, `spot`,
/// `vol`, or `expiry` is negative or non-finite, or `rate` is non-finite.
#[allow(clippy::too_many_arguments)]
pub fn long_position_summary(
    option_type: OptionType,
    strike: f64,
    premium: f64,
    contracts: u32,
    spot: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
) -> Result<LongPositionSummary, PricingError> {
    for (name, value) in [
        ("strike", strike),
        ("premium", premium),
        ("spot", spot),
        ("vol", vol),
        ("expiry", expiry),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "position {name} must be finite and >= 0"
            )));
        }
    }
    if !rate.is_finite() {
        return Err(PricingError::InvalidInput(
            "position rate must be finite".to_string(),
        ));
    }

    let entry_cost = premium * contracts as f64 * CONTRACT_MULTIPLIER;
    let breakeven = match option_type {
        OptionType::Call => strike + premium,
        OptionType::Put => strike - premium,
    };

    let probability_of_profit = if expiry == 0.0 || vol == 0.0 || spot == 0.0 || breakeven <= 0.0 {
        None
    } else {
        let d2 = ((spot / breakeven).ln() + (rate - 0.5 * vol * vol) * expiry)
            / (vol * expiry.sqrt());
        let prob = match option_type {
            OptionType::Call => normal_cdf(d2),
            OptionType::Put => normal_cdf(-d2),
        };
        Some(prob)
    };

    Ok(LongPositionSummary {
        entry_cost,
        max_risk: entry_cost,
        breakeven,
        probability_of_profit,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pnl_sign_conventions() {
        // Long gains when premium rises, short mirrors, linear in contracts.
        assert_eq!(position_pnl(PositionSide::Long, 2.0, 3.5, 1), 150.0);
        assert_eq!(position_pnl(PositionSide::Short, 2.0, 3.5, 1), -150.0);
        assert_eq!(position_pnl(PositionSide::Long, 2.0, 1.0, 3), -300.0);
        assert_eq!(position_pnl(PositionSide::Short, 2.0, 1.0, 3), 300.0);
        assert_eq!(position_pnl(PositionSide::Long, 2.0, 2.0, 10), 0.0);
    }

    #[test]
    fn long_call_summary_economics() {
        let summary = long_position_summary(
            OptionType::Call,
            100.0,
            3.40,
            2,
            100.0,
            0.05,
            0.2,
            1.0,
        )
        .unwrap();

        assert_relative_eq!(summary.entry_cost, 680.0, epsilon = 1e-12);
        assert_eq!(summary.max_risk, summary.entry_cost);
        assert_relative_eq!(summary.breakeven, 103.4, epsilon = 1e-12);

        let prob = summary.probability_of_profit.unwrap();
        assert!(prob > 0.0 && prob < 1.0);
        // ATM-ish call with positive drift: beating spot + premium is less
        // likely than a coin flip but not remote.
        assert!(prob > 0.2 && prob < 0.6);
    }

    #[test]
    fn put_breakeven_sits_below_strike() {
        let summary = long_position_summary(
            OptionType::Put,
            100.0,
            5.0,
            1,
            100.0,
            0.05,
            0.2,
            1.0,
        )
        .unwrap();
        assert_relative_eq!(summary.breakeven, 95.0, epsilon = 1e-12);

        let prob = summary.probability_of_profit.unwrap();
        assert!(prob > 0.0 && prob < 0.5);
    }

    #[test]
    fn probability_unavailable_for_degenerate_inputs() {
        let zero_expiry =
            long_position_summary(OptionType::Call, 100.0, 3.0, 1, 100.0, 0.05, 0.2, 0.0).unwrap();
        assert_eq!(zero_expiry.probability_of_profit, None);

        let zero_vol =
            long_position_summary(OptionType::Call, 100.0, 3.0, 1, 100.0, 0.05, 0.0, 1.0).unwrap();
        assert_eq!(zero_vol.probability_of_profit, None);

        // Put with premium >= strike has a non-positive breakeven.
        let deep_put =
            long_position_summary(OptionType::Put, 3.0, 5.0, 1, 100.0, 0.05, 0.2, 1.0).unwrap();
        assert_eq!(deep_put.probability_of_profit, None);
    }

    #[test]
    fn summary_rejects_malformed_numerics() {
        assert!(
            long_position_summary(OptionType::Call, -1.0, 3.0, 1, 100.0, 0.05, 0.2, 1.0).is_err()
        );
        assert!(
            long_position_summary(OptionType::Call, 100.0, f64::NAN, 1, 100.0, 0.05, 0.2, 1.0)
                .is_err()
        );
        assert!(long_position_summary(
            OptionType::Call,
            100.0,
            3.0,
            1,
            100.0,
            f64::INFINITY,
            0.2,
            1.0
        )
        .is_err());
    }
}
