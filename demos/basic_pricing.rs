//! Prices an American call and put on a CRR lattice and summarizes a long
//! position in the call.

use lattice_options::core::{OptionType, PricingEngine, PricingError};
use lattice_options::engines::tree::BinomialTreeEngine;
use lattice_options::instruments::VanillaOption;
use lattice_options::market::Market;
use lattice_options::risk::{long_position_summary, position_pnl, PositionSide};

fn main() -> Result<(), PricingError> {
    let (spot, strike, rate, vol, expiry) = (100.0, 100.0, 0.05, 0.20, 1.0);

    let market = Market::builder()
        .spot(spot)
        .rate(rate)
        .flat_vol(vol)
        .build()?;
    let engine = BinomialTreeEngine::new(100);

    let call = engine.price(&VanillaOption::american_call(strike, expiry), &market)?;
    let put = engine.price(&VanillaOption::american_put(strike, expiry), &market)?;

    println!("American call: {:.4}", call.price);
    println!("American put:  {:.4}", put.price);
    for (key, value) in call.diagnostics.iter() {
        println!("  {key} = {value:.6}");
    }

    let summary = long_position_summary(
        OptionType::Call,
        strike,
        call.price,
        1,
        spot,
        rate,
        vol,
        expiry,
    )?;
    println!("entry cost:  {:.2}", summary.entry_cost);
    println!("max risk:    {:.2}", summary.max_risk);
    println!("breakeven:   {:.2}", summary.breakeven);
    match summary.probability_of_profit {
        Some(p) => println!("prob profit: {:.1}%", 100.0 * p),
        None => println!("prob profit: n/a"),
    }

    // Mark the position against a 10% rally.
    let rallied = engine.price(
        &VanillaOption::american_call(strike, expiry),
        &Market::builder()
            .spot(spot * 1.10)
            .rate(rate)
            .flat_vol(vol)
            .build()?,
    )?;
    let pnl = position_pnl(PositionSide::Long, call.price, rallied.price, 1);
    println!("P&L after +10% spot move: {pnl:.2}");

    Ok(())
}
