//! Lattice-Options is a Cox-Ross-Rubinstein binomial pricing library for
//! European and American single-underlying equity options, with the position
//! P&L arithmetic that sits around a priced contract.
//!
//! The crate pairs a low-level lattice kernel with a small trait-based
//! product API: instruments validate themselves, a [`market::Market`]
//! snapshot carries spot/rate/volatility, and engines return a
//! [`core::PricingResult`] with scalar diagnostics attached.
//!
//! References used across modules:
//! - Cox, Ross, Rubinstein (1979), "Option Pricing: A Simplified Approach".
//! - Hull, *Options, Futures, and Other Derivatives* (11th ed.), Ch. 13.
//!
//! Numerical considerations:
//! - The lattice is O(steps²) time and O(steps) space; callers wanting a
//!   latency bound should cap `steps`, since cost is a deterministic
//!   function of that input alone.
//! - The risk-neutral up-probability is not clamped to [0, 1]; extreme
//!   `dt`-versus-volatility combinations propagate through the arithmetic
//!   unchanged.
//! - Degenerate inputs (zero spot, strike, expiry, or volatility) price to
//!   their limits rather than erroring.
//!
//! # Feature Flags
//! - `parallel`: enables Rayon-powered pricing of spot strips in
//!   [`pricing::binomial_price_curve`].
//!
//! # Quick Start
//! Price an American put on a 100-step lattice:
//! ```rust
//! use lattice_options::core::PricingEngine;
//! use lattice_options::engines::tree::BinomialTreeEngine;
//! use lattice_options::instruments::VanillaOption;
//! use lattice_options::market::Market;
//!
//! let market = Market::builder()
//!     .spot(100.0)
//!     .rate(0.05)
//!     .flat_vol(0.20)
//!     .build()
//!     .unwrap();
//! let put = VanillaOption::american_put(100.0, 1.0);
//! let result = BinomialTreeEngine::new(100).price(&put, &market).unwrap();
//! assert!(result.price > 6.0 && result.price < 6.2);
//! ```
//!
//! Or through the one-call front door:
//! ```rust
//! use lattice_options::core::{ExerciseStyle, OptionType};
//! use lattice_options::pricing::binomial_price;
//!
//! let call = binomial_price(
//!     OptionType::Call,
//!     ExerciseStyle::American,
//!     100.0, 100.0, 0.05, 0.20, 1.0, 100,
//! )
//! .unwrap();
//! assert!(call > 10.0 && call < 11.0);
//! ```
//!
//! Summarize a long position:
//! ```rust
//! use lattice_options::core::OptionType;
//! use lattice_options::risk::long_position_summary;
//!
//! let summary = long_position_summary(
//!     OptionType::Call, 100.0, 3.40, 1, 100.0, 0.05, 0.20, 0.5,
//! )
//! .unwrap();
//! assert_eq!(summary.entry_cost, 340.0);
//! assert_eq!(summary.breakeven, 103.4);
//! ```

pub mod core;
pub mod engines;
pub mod instruments;
pub mod market;
pub mod math;
pub mod pricing;
pub mod risk;

/// Common imports for ergonomic usage.
pub mod prelude {
    pub use crate::core::{
        Diagnostics, ExerciseStyle, Greeks, Instrument, OptionType, PricingEngine, PricingError,
        PricingResult,
    };
    pub use crate::engines::tree::BinomialTreeEngine;
    pub use crate::instruments::VanillaOption;
    pub use crate::market::{Market, VolSource, VolSurface};
    pub use crate::pricing::{binomial_price, binomial_price_curve};
    pub use crate::risk::{long_position_summary, position_pnl, PositionSide};
}
