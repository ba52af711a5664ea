pub mod types;
pub mod filter;
pub mod filter_where;
pub mod filter_order;
pub mod parse;

pub use types::*;
pub use filter::Filter;
pub use parse::parse_leading_int;

use crate::fleet::Reading;

/// Apply a telemetry query to a snapshot with default settings.
pub fn query(snapshot: Vec<Reading>, params: &TelemetryQuery) -> Vec<Reading> {
    let mut filter = Filter::new();
    filter.assign(params);
    filter.apply(snapshot)
}
