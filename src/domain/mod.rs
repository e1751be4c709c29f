//! Domain types: payment and rate records, the conversion table and the
//! daily report model.

pub mod conversion;
pub mod payment;
pub mod rate;
pub mod report;
