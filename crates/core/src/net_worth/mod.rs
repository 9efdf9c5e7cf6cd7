//! Aggregate net-worth view - read-only projections over one reload
//! generation's PnL report and ledger book.

mod net_worth_model;
mod net_worth_service;
mod net_worth_traits;

pub use net_worth_model::*;
pub use net_worth_service::*;
pub use net_worth_traits::*;
