//! Demo data a fresh dashboard session starts with.

use std::collections::BTreeSet;

use nuages_common::catalog::{BaseImage, Service};
use nuages_common::types::{ContainerId, ContainerStatus, RamUsage};

use crate::container::Container;

/// The two demo containers: one running web app and one stopped API server.
#[must_use]
pub fn demo_containers(domain_suffix: &str) -> Vec<Container> {
    vec![
        Container {
            id: ContainerId::new("1"),
            name: "webapp-demo".to_string(),
            domain: Container::domain_for("webapp-demo", domain_suffix),
            status: ContainerStatus::Running,
            uptime: "2d 14h".to_string(),
            ram: RamUsage::new(1536, 2048),
            cpu: 23,
            created_at: "2024-01-15".to_string(),
            image: BaseImage::Ubuntu2204,
            services: BTreeSet::from([Service::Nginx, Service::Nodejs, Service::Postgresql]),
        },
        Container {
            id: ContainerId::new("2"),
            name: "api-server".to_string(),
            domain: Container::domain_for("api-server", domain_suffix),
            status: ContainerStatus::Stopped,
            uptime: "0d 0h".to_string(),
            ram: RamUsage::new(0, 1024),
            cpu: 0,
            created_at: "2024-01-10".to_string(),
            image: BaseImage::Debian12,
            services: BTreeSet::from([Service::Python, Service::Redis]),
        },
    ]
}
