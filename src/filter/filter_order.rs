use crate::fleet::Reading;

use super::types::SortDirection;

pub struct FilterOrder;

impl FilterOrder {
    /// Stable sort by packet in the given direction.
    pub fn apply(readings: &mut [Reading], sort: SortDirection) {
        match sort {
            SortDirection::Asc => readings.sort_by(|a, b| a.packet.cmp(&b.packet)),
            SortDirection::Desc => readings.sort_by(|a, b| b.packet.cmp(&a.packet)),
        }
    }
}
