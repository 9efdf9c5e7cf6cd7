//! Transaction ledger - ordered per-(symbol, account) transaction chains
//! with running quantities and adjusted cost basis.

mod ledger_book;
mod ledger_model;

pub use ledger_book::*;
pub use ledger_model::*;
