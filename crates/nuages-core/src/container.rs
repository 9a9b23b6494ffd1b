//! Core container struct and its status transitions.

use std::collections::BTreeSet;

use nuages_common::catalog::{BaseImage, Service};
use nuages_common::constants::{MAX_CPU_PERCENT, ZERO_UPTIME};
use nuages_common::types::{ContainerId, ContainerStatus, RamUsage};
use serde::{Deserialize, Serialize};

/// A simulated container with its configuration and synthetic metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Unique identifier.
    pub id: ContainerId,
    /// User-chosen name.
    pub name: String,
    /// Public domain, derived from the name at creation.
    pub domain: String,
    /// Current status.
    pub status: ContainerStatus,
    /// Display uptime. Reset on every transition, never advanced.
    pub uptime: String,
    /// Memory usage in megabytes.
    pub ram: RamUsage,
    /// CPU usage percentage, 0 while stopped.
    pub cpu: u8,
    /// Creation date, `YYYY-MM-DD`.
    pub created_at: String,
    /// Base image chosen at creation.
    pub image: BaseImage,
    /// Services chosen at creation.
    pub services: BTreeSet<Service>,
}

impl Container {
    /// Derives the public domain for a container name.
    #[must_use]
    pub fn domain_for(name: &str, suffix: &str) -> String {
        format!("{name}.{suffix}")
    }

    /// Marks the container running with a fresh uptime and the given CPU value.
    ///
    /// Values above 100 are clamped.
    pub fn start(&mut self, cpu: u8) {
        self.status = ContainerStatus::Running;
        ZERO_UPTIME.clone_into(&mut self.uptime);
        self.cpu = cpu.min(MAX_CPU_PERCENT);
    }

    /// Marks the container stopped with a fresh uptime and no CPU usage.
    pub fn stop(&mut self) {
        self.status = ContainerStatus::Stopped;
        ZERO_UPTIME.clone_into(&mut self.uptime);
        self.cpu = 0;
    }

    /// Returns `true` if the container is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.status.is_running()
    }
}
