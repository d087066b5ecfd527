/// CSV export of computed simulation series.
pub mod export;
