//! Minaret library exports for testing

pub mod core;
pub mod geo;
pub mod timings;
pub mod tui;

#[cfg(test)]
pub mod test_support;
