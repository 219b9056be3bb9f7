//! Module `engines::tree::binomial`.
//!
//! Cox-Ross-Rubinstein lattice engine for European and American vanilla
//! options: a recombining tree built forward, valued by backward induction,
//! with the early-exercise decision injected at every interior node for
//! American contracts.
//!
//! References: Cox-Ross-Rubinstein (1979) and Hull (11th ed.) Ch. 13.
//!
//! Numerical considerations: cost is O(steps²) time and O(steps) auxiliary
//! space; the option-value buffer is narrowed in place, one node per step.
//! Convergence toward the continuous-time limit is roughly first-order in
//! step count, so deep ITM/OTM contracts may need larger depth. The
//! risk-neutral probability is deliberately NOT clamped to [0, 1]; extreme
//! `dt`-vs-volatility combinations propagate through the arithmetic as-is
//! (see `risk_neutral_probability_can_leave_unit_interval` in the
//! integration tests).

use crate::core::{
    DiagKey, Diagnostics, ExerciseStyle, PricingEngine, PricingError, PricingResult,
};
use crate::instruments::vanilla::VanillaOption;
use crate::market::Market;

/// Cox-Ross-Rubinstein binomial tree engine.
#[derive(Debug, Clone)]
pub struct BinomialTreeEngine {
    /// Number of tree steps.
    pub steps: usize,
}

impl BinomialTreeEngine {
    /// Creates a tree engine with the given number of steps.
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Degenerate lattice for zero volatility: the underlying follows the
    /// risk-neutral forward `S·exp(r·s·dt)` deterministically, so each slice
    /// holds a single node and induction is a pure discount step.
    fn price_deterministic_drift(
        &self,
        instrument: &VanillaOption,
        market: &Market,
        dt: f64,
        disc: f64,
    ) -> f64 {
        let is_american = instrument.exercise == ExerciseStyle::American;
        let forward = market.spot * (market.rate * instrument.expiry).exp();

        let mut value = instrument.option_type.intrinsic(forward, instrument.strike);
        for s in (0..self.steps).rev() {
            value *= disc;
            if is_american {
                let node_spot = market.spot * (market.rate * s as f64 * dt).exp();
                value = value.max(instrument.option_type.intrinsic(node_spot, instrument.strike));
            }
        }
        value
    }
}

impl PricingEngine<VanillaOption> for BinomialTreeEngine {
    fn price(
        &self,
        instrument: &VanillaOption,
        market: &Market,
    ) -> Result<PricingResult, PricingError> {
        instrument.validate()?;

        if self.steps == 0 {
            return Err(PricingError::InvalidInput(
                "binomial steps must be >= 1".to_string(),
            ));
        }

        if instrument.expiry == 0.0 {
            return Ok(PricingResult {
                price: instrument
                    .option_type
                    .intrinsic(market.spot, instrument.strike),
                stderr: None,
                greeks: None,
                diagnostics: Diagnostics::new(),
            });
        }

        let vol = market.vol_for(instrument.strike, instrument.expiry);
        if !vol.is_finite() || vol < 0.0 {
            return Err(PricingError::InvalidInput(
                "market volatility must be finite and >= 0".to_string(),
            ));
        }

        let dt = instrument.expiry / self.steps as f64;
        let disc = (-market.rate * dt).exp();

        if vol == 0.0 {
            let price = self.price_deterministic_drift(instrument, market, dt, disc);
            let mut diagnostics = Diagnostics::new();
            diagnostics.insert_key(DiagKey::NumSteps, self.steps as f64);
            diagnostics.insert_key(DiagKey::DiscountFactor, disc);
            return Ok(PricingResult {
                price,
                stderr: None,
                greeks: None,
                diagnostics,
            });
        }

        let u = (vol * dt.sqrt()).exp();
        let d = 1.0 / u;
        // Risk-neutral up-probability; left unclamped even when dt is large
        // relative to vol and p leaves [0, 1].
        let p = ((market.rate * dt).exp() - d) / (u - d);

        let is_american = instrument.exercise == ExerciseStyle::American;

        // Multiplicative recurrence replaces O(steps^2) powf() calls:
        // spot * u^j * d^(steps-j) = spot * d^steps * (u/d)^j.
        let ratio = u / d;
        let disc_p = disc * p;
        let disc_1mp = disc * (1.0 - p);

        let mut values = vec![0.0_f64; self.steps + 1];
        {
            let mut st = market.spot * d.powi(self.steps as i32);
            for value in values.iter_mut() {
                *value = instrument.option_type.intrinsic(st, instrument.strike);
                st *= ratio;
            }
        }

        // Backward induction, narrowing the live prefix of `values` by one
        // node per step. Iterating j upward means values[j + 1] is still the
        // step-(i + 1) value when read.
        let mut base = market.spot * d.powi((self.steps - 1) as i32);
        for i in (0..self.steps).rev() {
            if is_american {
                let mut st = base;
                for j in 0..=i {
                    let continuation = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
                    let exercise = instrument.option_type.intrinsic(st, instrument.strike);
                    values[j] = continuation.max(exercise);
                    st *= ratio;
                }
            } else {
                for j in 0..=i {
                    values[j] = disc_p.mul_add(values[j + 1], disc_1mp * values[j]);
                }
            }
            base *= u;
        }

        let mut diagnostics = Diagnostics::new();
        diagnostics.insert_key(DiagKey::NumSteps, self.steps as f64);
        diagnostics.insert_key(DiagKey::U, u);
        diagnostics.insert_key(DiagKey::D, d);
        diagnostics.insert_key(DiagKey::Pu, p);
        diagnostics.insert_key(DiagKey::DiscountFactor, disc);

        Ok(PricingResult {
            price: values[0],
            stderr: None,
            greeks: None,
            diagnostics,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn flat_market(spot: f64, rate: f64, vol: f64) -> Market {
        Market::builder()
            .spot(spot)
            .rate(rate)
            .flat_vol(vol)
            .build()
            .unwrap()
    }

    #[test]
    fn one_step_tree_matches_hand_computation() {
        // N = 1, r = 0: price = p * payoff_up + (1 - p) * payoff_down.
        let market = flat_market(100.0, 0.0, 0.2);
        let option = VanillaOption::european_call(100.0, 1.0);
        let engine = BinomialTreeEngine::new(1);

        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let p = (1.0 - d) / (u - d);
        let expected = p * (100.0 * u - 100.0);

        let result = engine.price(&option, &market).unwrap();
        assert_relative_eq!(result.price, expected, epsilon = 1e-12);
    }

    #[test]
    fn zero_steps_is_rejected_before_any_work() {
        let market = flat_market(100.0, 0.05, 0.2);
        let option = VanillaOption::european_call(100.0, 1.0);
        let err = BinomialTreeEngine::new(0).price(&option, &market).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }

    #[test]
    fn zero_expiry_prices_to_intrinsic_for_both_styles() {
        let market = flat_market(105.0, 0.05, 0.2);
        let engine = BinomialTreeEngine::new(100);

        for option in [
            VanillaOption::european_call(100.0, 0.0),
            VanillaOption::american_call(100.0, 0.0),
        ] {
            assert_eq!(engine.price(&option, &market).unwrap().price, 5.0);
        }
        for option in [
            VanillaOption::european_put(110.0, 0.0),
            VanillaOption::american_put(110.0, 0.0),
        ] {
            assert_eq!(engine.price(&option, &market).unwrap().price, 5.0);
        }
    }

    #[test]
    fn zero_spot_degenerates_cleanly() {
        let market = flat_market(0.0, 0.05, 0.2);
        let engine = BinomialTreeEngine::new(50);

        let call = engine
            .price(&VanillaOption::european_call(100.0, 1.0), &market)
            .unwrap();
        assert_eq!(call.price, 0.0);

        // A put on a worthless underlying is the discounted strike.
        let put = engine
            .price(&VanillaOption::european_put(100.0, 1.0), &market)
            .unwrap();
        assert_relative_eq!(put.price, 100.0 * (-0.05_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn zero_vol_european_call_is_discounted_forward_intrinsic() {
        let (s, k, r, t) = (100.0, 95.0, 0.05, 1.0);
        let market = flat_market(s, r, 0.0);
        let engine = BinomialTreeEngine::new(100);

        let result = engine
            .price(&VanillaOption::european_call(k, t), &market)
            .unwrap();
        let expected = (s * (r * t).exp() - k).max(0.0) * (-r * t).exp();
        assert_relative_eq!(result.price, expected, epsilon = 1e-10);
    }

    #[test]
    fn zero_vol_american_put_exercises_immediately_when_rate_positive() {
        // Deterministic upward drift erodes put intrinsic over time, so the
        // optimal exercise is at the first opportunity.
        let market = flat_market(90.0, 0.05, 0.0);
        let engine = BinomialTreeEngine::new(100);

        let result = engine
            .price(&VanillaOption::american_put(100.0, 1.0), &market)
            .unwrap();
        assert_relative_eq!(result.price, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn diagnostics_carry_lattice_parameters() {
        let market = flat_market(100.0, 0.05, 0.2);
        let option = VanillaOption::american_put(100.0, 1.0);
        let result = BinomialTreeEngine::new(100).price(&option, &market).unwrap();

        assert_eq!(result.diagnostics.get("num_steps"), Some(&100.0));
        let u = *result.diagnostics.get("u").unwrap();
        let d = *result.diagnostics.get("d").unwrap();
        assert_relative_eq!(u * d, 1.0, epsilon = 1e-12);
        assert!(result.diagnostics.contains_key("pu"));
        assert!(result.diagnostics.contains_key("discount_factor"));
        assert!(result.greeks.is_none());
        assert!(result.stderr.is_none());
    }
}
