//! Market data seams - price warehouse and outdated-symbol table.

mod market_data_traits;
mod outdated_symbols;

pub use market_data_traits::*;
pub use outdated_symbols::*;

#[cfg(test)]
mod outdated_symbols_tests;
