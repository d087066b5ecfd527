//! Deterministic solar street-light simulator.

pub mod config;
pub mod io;
/// Illuminance, panel output, battery, and consumption calculation modules.
pub mod sim;
pub mod table;
#[cfg(feature = "tui")]
pub mod tui;
