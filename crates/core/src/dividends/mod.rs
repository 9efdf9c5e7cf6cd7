//! Dividend accumulator - per-instrument records plus date-indexed and
//! cumulative dividend sums.

mod dividends_model;
mod dividends_service;

pub use dividends_model::*;
pub use dividends_service::*;

#[cfg(test)]
mod dividends_service_tests;
