//! Aggregate statistics for the dashboard view.

use nuages_common::constants::RECENT_ACTIVITY_LIMIT;
use serde::{Deserialize, Serialize};

use crate::container::Container;

/// Totals computed over every container in the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Containers currently running.
    pub running: usize,
    /// All containers.
    pub total: usize,
    /// Sum of used memory, in megabytes.
    pub ram_used_mb: u64,
    /// Mean CPU percentage over all containers, 0 when there are none.
    pub average_cpu: f64,
}

impl DashboardSummary {
    /// Computes the summary for a set of containers.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_containers(containers: &[Container]) -> Self {
        let total = containers.len();
        let running = containers.iter().filter(|c| c.is_running()).count();
        let ram_used_mb = containers.iter().map(|c| c.ram.used).sum();
        let average_cpu = if total == 0 {
            0.0
        } else {
            let cpu_sum: u64 = containers.iter().map(|c| u64::from(c.cpu)).sum();
            cpu_sum as f64 / total as f64
        };
        Self {
            running,
            total,
            ram_used_mb,
            average_cpu,
        }
    }
}

/// Containers shown in the recent activity panel.
#[must_use]
pub fn recent_activity(containers: &[Container]) -> &[Container] {
    &containers[..containers.len().min(RECENT_ACTIVITY_LIMIT)]
}
