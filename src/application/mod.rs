//! Application layer containing the aggregation logic.
//!
//! [`aggregator::DailyAggregator`] folds typed payments into a
//! [`crate::domain::report::DailyReport`] using a
//! [`crate::domain::conversion::ConversionTable`].

pub mod aggregator;
