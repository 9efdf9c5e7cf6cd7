//! Calendar index - compact integer day encoding and the known-day set.

mod calendar_index;
mod day_id;

pub use calendar_index::*;
pub use day_id::*;
