//! Canonical plain-vanilla option contract definition used throughout the library.
//!
//! [`VanillaOption`] stores side, strike, expiry, and exercise rights
//! ([`crate::core::ExerciseStyle`]: European/American).
//! Validation accepts `strike == 0` and `expiry == 0` as degenerate
//! boundaries (a zero-strike call is the discounted forward; zero expiry
//! prices to intrinsic value) and rejects negative or non-finite fields.

use serde::{Deserialize, Serialize};

use crate::core::{ExerciseStyle, Instrument, OptionType, PricingError};

/// Vanilla option contract.
///
/// This is the canonical input for the lattice engine: strike `K`, expiry
/// `T` in year fractions, option side, and exercise rights.
///
/// # Examples
/// ```
/// use lattice_options::core::{ExerciseStyle, OptionType};
/// use lattice_options::instruments::VanillaOption;
///
/// let option = VanillaOption {
///     option_type: OptionType::Call,
///     strike: 100.0,
///     expiry: 1.0,
///     exercise: ExerciseStyle::European,
/// };
/// assert!(option.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VanillaOption {
    /// Call or put.
    pub option_type: OptionType,
    /// Strike level.
    pub strike: f64,
    /// Expiry in years.
    pub expiry: f64,
    /// Exercise style.
    pub exercise: ExerciseStyle,
}

impl VanillaOption {
    /// Builds a European call option.
    ///
    /// `strike` and `expiry` are interpreted in spot units and year fractions.
    pub fn european_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            exercise: ExerciseStyle::European,
        }
    }

    /// Builds a European put option.
    pub fn european_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            exercise: ExerciseStyle::European,
        }
    }

    /// Builds an American call option.
    pub fn american_call(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Call,
            strike,
            expiry,
            exercise: ExerciseStyle::American,
        }
    }

    /// Builds an American put option.
    ///
    /// # Examples
    /// ```
    /// use lattice_options::core::ExerciseStyle;
    /// use lattice_options::instruments::VanillaOption;
    ///
    /// let put = VanillaOption::american_put(100.0, 2.0);
    /// assert!(matches!(put.exercise, ExerciseStyle::American));
    /// ```
    pub fn american_put(strike: f64, expiry: f64) -> Self {
        Self {
            option_type: OptionType::Put,
            strike,
            expiry,
            exercise: ExerciseStyle::American,
        }
    }

    /// Validates instrument fields.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidInput`] when `strike` or `expiry` is
    /// negative or non-finite.
    ///
    /// # Numerical notes
    /// `expiry == 0` is accepted to support immediate-expiry intrinsic-value
    /// pricing; `strike == 0` is accepted as a degenerate boundary.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.strike.is_finite() || self.strike < 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla strike must be finite and >= 0".to_string(),
            ));
        }
        if !self.expiry.is_finite() || self.expiry < 0.0 {
            return Err(PricingError::InvalidInput(
                "vanilla expiry must be finite and >= 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Instrument for VanillaOption {
    fn instrument_type(&self) -> &str {
        "VanillaOption"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_degenerate_boundaries() {
        assert!(VanillaOption::european_call(0.0, 1.0).validate().is_ok());
        assert!(VanillaOption::american_put(100.0, 0.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_and_non_finite() {
        assert!(VanillaOption::european_call(-1.0, 1.0).validate().is_err());
        assert!(VanillaOption::european_call(100.0, -0.5).validate().is_err());
        assert!(VanillaOption::european_call(f64::NAN, 1.0).validate().is_err());
        assert!(VanillaOption::american_call(100.0, f64::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn serde_round_trip() {
        let option = VanillaOption::american_put(95.0, 0.5);
        let json = serde_json::to_string(&option).unwrap();
        let decoded: VanillaOption = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, option);
    }
}
