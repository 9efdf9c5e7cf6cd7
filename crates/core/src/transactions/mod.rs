//! Transaction domain models and the portfolio source seam.

mod transactions_model;
mod transactions_traits;

pub use transactions_model::*;
pub use transactions_traits::*;

#[cfg(test)]
mod transactions_model_tests;
