//! Direct pricing helpers for callers that do not want the trait plumbing.

pub mod binomial;

pub use crate::core::types::OptionType;
pub use binomial::{binomial_price, binomial_price_curve};
