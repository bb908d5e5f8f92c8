//! Aggregates shown under the order history table.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::net::types::HistoryEntry;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HistorySummary {
    pub count: usize,
    pub total: f64,
    /// Average ticket; zero when there are no orders.
    pub average: f64,
}

impl HistorySummary {
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let count = entries.len();
        let total: f64 = entries.iter().map(|e| e.valor_total).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = if count == 0 { 0.0 } else { total / count as f64 };
        Self { count, total, average }
    }
}
