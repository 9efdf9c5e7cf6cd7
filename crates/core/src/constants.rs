/// Decimal precision for PnL calculations.
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
