use crate::fleet::Reading;

use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::parse::parse_leading_int;
use super::types::{SortDirection, TelemetryQuery};

/// Telemetry query pipeline: where stages, then sort, then limit.
///
/// Building a filter never fails. Malformed option values leave their stage
/// inactive instead of producing an error.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    where_data: FilterWhere,
    order: SortDirection,
    limit: Option<usize>,
    max_limit: Option<usize>,
    debug_logging: bool,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, query: &TelemetryQuery) -> &mut Self {
        if let Some(ref id) = query.device_id { self.where_data.device_id(id); }
        if let Some(ref prefix) = query.device_prefix { self.where_data.device_prefix(prefix); }
        if let Some(ref packet) = query.packet { self.where_data.packet(packet); }
        self.where_data.packet_range(query.packet_from.as_deref(), query.packet_to.as_deref());
        self.order(query.sort.as_deref());
        if let Some(ref limit) = query.limit { self.limit(limit); }
        self
    }

    pub fn order(&mut self, sort: Option<&str>) -> &mut Self {
        self.order = SortDirection::from_param(sort);
        self
    }

    /// Non-numeric or non-positive values disable truncation.
    pub fn limit(&mut self, limit: &str) -> &mut Self {
        self.limit = parse_leading_int(limit)
            .filter(|l| *l > 0)
            .map(|l| usize::try_from(l).unwrap_or(usize::MAX));
        self
    }

    /// Upper bound for an active limit. Does not introduce truncation on its own.
    pub fn max_limit(&mut self, max_limit: Option<usize>) -> &mut Self {
        self.max_limit = max_limit;
        self
    }

    pub fn debug_logging(&mut self, enabled: bool) -> &mut Self {
        self.debug_logging = enabled;
        self
    }

    pub fn where_data(&self) -> &FilterWhere {
        &self.where_data
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.order
    }

    /// The truncation that will actually be applied, after the configured cap.
    pub fn effective_limit(&self) -> Option<usize> {
        match (self.limit, self.max_limit) {
            (Some(limit), Some(max)) if limit > max => {
                if self.debug_logging {
                    tracing::warn!("Limit {} exceeds max {}, capping to max", limit, max);
                }
                Some(max)
            }
            (limit, _) => limit,
        }
    }

    /// Run the pipeline over a snapshot. Truncation happens strictly after sorting.
    pub fn apply(&self, snapshot: Vec<Reading>) -> Vec<Reading> {
        let total = snapshot.len();
        let mut readings = self.where_data.apply(snapshot, self.debug_logging);
        FilterOrder::apply(&mut readings, self.order);
        if let Some(limit) = self.effective_limit() {
            readings.truncate(limit);
        }

        if self.debug_logging {
            tracing::debug!(
                total,
                returned = readings.len(),
                sort = self.order.as_str(),
                "telemetry query complete"
            );
        }
        readings
    }
}
