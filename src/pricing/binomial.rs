//! Module `pricing::binomial`.
//!
//! Free-function front door to the CRR lattice: one call, six scalars plus
//! side and style in, one price out. Wraps [`BinomialTreeEngine`] so quick
//! valuation tasks avoid assembling instruments and market snapshots by hand;
//! prefer the trait-based composition for larger systems.

use crate::core::{ExerciseStyle, OptionType, PricingEngine, PricingError};
use crate::engines::tree::BinomialTreeEngine;
use crate::instruments::VanillaOption;
use crate::market::Market;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Prices a vanilla option on a CRR binomial lattice.
///
/// Parameters:
/// - `option_type`: call or put payoff direction.
/// - `exercise`: European or American rights.
/// - `spot`: current underlying price (`>= 0`).
/// - `strike`: strike price (`>= 0`).
/// - `rate`: continuously compounded risk-free rate; negative rates allowed.
/// - `vol`: annualized volatility (`>= 0`; zero collapses to deterministic drift).
/// - `expiry`: years to expiry (`>= 0`; zero prices to intrinsic value).
/// - `steps`: lattice resolution (`>= 1`); cost is O(steps²).
///
/// # Errors
/// Returns [`PricingError::InvalidInput`] for negative or non-finite numeric
/// inputs or `steps == 0`, before any lattice is built.
///
/// # Examples
/// ```
/// use lattice_options::core::{ExerciseStyle, OptionType};
/// use lattice_options::pricing::binomial_price;
///
/// let put = binomial_price(
///     OptionType::Put,
///     ExerciseStyle::American,
///     100.0, 100.0, 0.05, 0.20, 1.0, 100,
/// )
/// .unwrap();
/// assert!(put > 6.0 && put < 6.2);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn binomial_price(
    option_type: OptionType,
    exercise: ExerciseStyle,
    spot: f64,
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
) -> Result<f64, PricingError> {
    let market = Market::builder()
        .spot(spot)
        .rate(rate)
        .flat_vol(vol)
        .build()?;
    let option = VanillaOption {
        option_type,
        strike,
        expiry,
        exercise,
    };
    let result = BinomialTreeEngine::new(steps).price(&option, &market)?;
    Ok(result.price)
}

/// Prices the same contract across a strip of spot levels.
///
/// Each point is an independent lattice run, so with the `parallel` feature
/// enabled the strip is priced across threads; results are returned in input
/// order either way. This is the repricing loop behind a P&L-versus-spot
/// profile.
///
/// # Errors
/// Fails with [`PricingError::InvalidInput`] if any spot is invalid; no
/// partial output is returned.
#[allow(clippy::too_many_arguments)]
pub fn binomial_price_curve(
    option_type: OptionType,
    exercise: ExerciseStyle,
    spots: &[f64],
    strike: f64,
    rate: f64,
    vol: f64,
    expiry: f64,
    steps: usize,
) -> Result<Vec<f64>, PricingError> {
    #[cfg(feature = "parallel")]
    {
        spots
            .par_iter()
            .map(|&spot| {
                binomial_price(option_type, exercise, spot, strike, rate, vol, expiry, steps)
            })
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        spots
            .iter()
            .map(|&spot| {
                binomial_price(option_type, exercise, spot, strike, rate, vol, expiry, steps)
            })
            .collect()
    }
}
