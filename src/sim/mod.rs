/// Battery charging, discharge, and gauge calculations.
pub mod battery;
pub mod consumption;
pub mod engine;
/// Lamp illuminance from the inverse-square law.
pub mod illuminance;
pub mod panel;
pub mod types;
