//! Core traits, common domain types, and library-wide result/error structures.

use crate::market::Market;

pub mod types;

pub use types::*;

/// Standardized Greeks container used by engine results.
///
/// The lattice engine does not populate this today; the slot exists so that
/// sensitivity-producing engines can be added without changing the result type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// First derivative to spot.
    pub delta: f64,
    /// Second derivative to spot.
    pub gamma: f64,
    /// First derivative to volatility.
    pub vega: f64,
    /// First derivative to time.
    pub theta: f64,
    /// First derivative to rate.
    pub rho: f64,
}

/// Common trait implemented by every priceable instrument.
pub trait Instrument: std::fmt::Debug {
    /// Returns a short type identifier for diagnostics and bindings.
    fn instrument_type(&self) -> &str;
}

/// Pricing engine abstraction over an instrument type.
pub trait PricingEngine<I: Instrument> {
    /// Prices an instrument under the provided market state.
    fn price(&self, instrument: &I, market: &Market) -> Result<PricingResult, PricingError>;
}

/// Compact key set for engine diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagKey {
    D,
    DiscountFactor,
    NumSteps,
    Pu,
    U,
}

impl DiagKey {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => "d",
            Self::DiscountFactor => "discount_factor",
            Self::NumSteps => "num_steps",
            Self::Pu => "pu",
            Self::U => "u",
        }
    }
}

impl std::str::FromStr for DiagKey {
    type Err = ();

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "d" => Ok(Self::D),
            "discount_factor" => Ok(Self::DiscountFactor),
            "num_steps" => Ok(Self::NumSteps),
            "pu" => Ok(Self::Pu),
            "u" => Ok(Self::U),
            _ => Err(()),
        }
    }
}

/// Inline diagnostics storage used in [`PricingResult`].
///
/// Fixed-capacity so results stay allocation-free on the pricing hot path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: [Option<(DiagKey, f64)>; 8],
}

impl Diagnostics {
    pub const CAPACITY: usize = 8;

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries[0].is_none()
    }

    /// Insert a diagnostic value using a pre-resolved [`DiagKey`], avoiding the
    /// string-to-enum match on the hot path.
    #[inline]
    pub fn insert_key(&mut self, key: DiagKey, value: f64) -> Option<f64> {
        for (entry_key, existing) in self.entries.iter_mut().flatten() {
            if *entry_key == key {
                let prev = *existing;
                *existing = value;
                return Some(prev);
            }
        }

        for entry in &mut self.entries {
            if entry.is_none() {
                *entry = Some((key, value));
                return None;
            }
        }

        panic!("diagnostics capacity exceeded ({})", Self::CAPACITY);
    }

    #[inline]
    fn iter_entries(&self) -> impl Iterator<Item = &(DiagKey, f64)> {
        self.entries.iter().filter_map(Option::as_ref)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&f64> {
        let key: DiagKey = key.parse().ok()?;
        self.iter_entries()
            .find_map(|(entry_key, value)| (*entry_key == key).then_some(value))
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &f64)> {
        self.iter_entries().map(|(k, v)| (k.as_str(), v))
    }
}

/// Unified engine result payload.
#[derive(Debug, Clone)]
pub struct PricingResult {
    /// Present value.
    pub price: f64,
    /// Standard error (simulation engines only).
    pub stderr: Option<f64>,
    /// Greeks when available from the engine.
    pub greeks: Option<Greeks>,
    /// Engine-specific scalar diagnostics.
    pub diagnostics: Diagnostics,
}

/// Engine and model errors surfaced by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Input validation error.
    InvalidInput(String),
    /// Required market datum is unavailable.
    MarketDataMissing(String),
    /// Numerical issue (overflow, invalid state, etc.).
    NumericalError(String),
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::MarketDataMissing(msg) => write!(f, "market data missing: {msg}"),
            Self::NumericalError(msg) => write!(f, "numerical error: {msg}"),
        }
    }
}

impl std::error::Error for PricingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_insert_and_lookup() {
        let mut diag = Diagnostics::new();
        assert!(diag.is_empty());

        assert_eq!(diag.insert_key(DiagKey::NumSteps, 100.0), None);
        assert_eq!(diag.insert_key(DiagKey::Pu, 0.51), None);
        assert_eq!(diag.insert_key(DiagKey::NumSteps, 200.0), Some(100.0));

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.get("num_steps"), Some(&200.0));
        assert_eq!(diag.get("pu"), Some(&0.51));
        assert_eq!(diag.get("unknown_key"), None);
        assert!(diag.contains_key("pu"));
    }

    #[test]
    fn option_type_sign_and_intrinsic() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(110.0, 100.0), 0.0);
    }
}
