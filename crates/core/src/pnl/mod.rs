//! PnL engine - walks the trading calendar against each ledger to layer
//! unrealized, realized, and dividend-adjusted gains.

mod pnl_engine;
mod pnl_model;

pub use pnl_engine::*;
pub use pnl_model::*;


#[cfg(test)]
mod pnl_model_tests;
