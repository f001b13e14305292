pub mod format;
pub mod unit;
