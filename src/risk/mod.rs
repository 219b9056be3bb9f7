//! Position-level P&L arithmetic and trade summaries.

pub mod pnl;

pub use pnl::{
    long_position_summary, position_pnl, LongPositionSummary, PositionSide, CONTRACT_MULTIPLIER,
};
