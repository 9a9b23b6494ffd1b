//! In-memory registry of simulated containers.
//!
//! Containers are kept in insertion order. Identifiers come from a
//! per-registry counter and are not reused after a delete unless the
//! counter wraps past `u64::MAX`.

use nuages_common::config::NuagesConfig;
use nuages_common::constants::ZERO_UPTIME;
use nuages_common::error::{NuagesError, Result};
use nuages_common::types::{ContainerId, ContainerStatus, RamUsage};

use crate::container::Container;
use crate::metrics::MetricsSource;
use crate::validator::CreateContainerData;

/// The set of known containers.
#[derive(Debug)]
pub struct Registry {
    containers: Vec<Container>,
    next_id: u64,
    domain_suffix: String,
    ram_total_mb: u64,
    metrics: Box<dyn MetricsSource>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(config: &NuagesConfig, metrics: Box<dyn MetricsSource>) -> Self {
        Self {
            containers: Vec::new(),
            next_id: 1,
            domain_suffix: config.domain_suffix.clone(),
            ram_total_mb: config.default_ram_total_mb,
            metrics,
        }
    }

    /// Admits a new stopped container built from the draft.
    ///
    /// Always succeeds. Names are not checked for uniqueness, so two
    /// containers may share a name and a domain.
    pub fn create(&mut self, data: CreateContainerData) -> &Container {
        let id = self.allocate_id();
        let container = Container {
            domain: Container::domain_for(&data.name, &self.domain_suffix),
            id,
            name: data.name,
            status: ContainerStatus::Stopped,
            uptime: ZERO_UPTIME.to_string(),
            ram: RamUsage::new(0, self.ram_total_mb),
            cpu: 0,
            created_at: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            image: data.image,
            services: data.services,
        };
        tracing::info!(id = %container.id, name = %container.name, "container created");

        let idx = self.containers.len();
        self.containers.push(container);
        &self.containers[idx]
    }

    /// Inserts a fully formed container, typically demo data.
    ///
    /// If the id is numeric, the counter is advanced past it so later
    /// allocations cannot collide. An id of `u64::MAX` leaves the counter
    /// alone; allocation skips ids that are already taken.
    pub fn insert(&mut self, container: Container) {
        let next = container
            .id
            .as_str()
            .parse::<u64>()
            .ok()
            .and_then(|n| n.checked_add(1));
        if let Some(next) = next {
            self.next_id = self.next_id.max(next);
        }
        tracing::debug!(id = %container.id, name = %container.name, "container inserted");
        self.containers.push(container);
    }

    /// Starts a container and samples a fresh CPU value for it.
    ///
    /// Starting a running container is allowed: it resets the uptime and
    /// re-samples the CPU.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::NotFound`] if no container has this id.
    pub fn start(&mut self, id: &ContainerId) -> Result<&Container> {
        let idx = self.position(id)?;
        let cpu = self.metrics.sample_cpu(&self.containers[idx]);
        self.containers[idx].start(cpu);
        tracing::info!(id = %id, cpu, "container started");
        Ok(&self.containers[idx])
    }

    /// Stops a container.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::NotFound`] if no container has this id.
    pub fn stop(&mut self, id: &ContainerId) -> Result<&Container> {
        let idx = self.position(id)?;
        self.containers[idx].stop();
        tracing::info!(id = %id, "container stopped");
        Ok(&self.containers[idx])
    }

    /// Removes a container and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::NotFound`] if no container has this id.
    pub fn delete(&mut self, id: &ContainerId) -> Result<Container> {
        let idx = self.position(id)?;
        let removed = self.containers.remove(idx);
        tracing::info!(id = %id, name = %removed.name, "container deleted");
        Ok(removed)
    }

    /// Looks up a container by id.
    #[must_use]
    pub fn get(&self, id: &ContainerId) -> Option<&Container> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// All containers in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Container] {
        &self.containers
    }

    /// Number of containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` if the registry holds no containers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Domain suffix used for new containers.
    #[must_use]
    pub fn domain_suffix(&self) -> &str {
        &self.domain_suffix
    }

    /// Next free numeric id. The counter wraps back to 1 past `u64::MAX`.
    fn allocate_id(&mut self) -> ContainerId {
        loop {
            let candidate = ContainerId::new(self.next_id.to_string());
            self.next_id = self.next_id.checked_add(1).unwrap_or(1);
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn position(&self, id: &ContainerId) -> Result<usize> {
        self.containers
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| NuagesError::NotFound {
                kind: "container",
                id: id.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use nuages_common::catalog::{BaseImage, Service};

    use super::*;
    use crate::metrics::{FixedCpu, RandomCpu};

    fn registry() -> Registry {
        Registry::new(&NuagesConfig::default(), Box::new(FixedCpu(25)))
    }

    #[test]
    fn create_sets_initial_state() {
        let mut reg = registry();
        let draft = CreateContainerData::new("demo")
            .with_image(BaseImage::Debian12)
            .with_service(Service::Nginx)
            .with_service(Service::Redis);

        let c = reg.create(draft);
        assert_eq!(c.domain, "demo.nuages.tikloud.re");
        assert_eq!(c.status, ContainerStatus::Stopped);
        assert_eq!(c.uptime, "0d 0h");
        assert_eq!(c.ram, RamUsage::new(0, 1024));
        assert_eq!(c.cpu, 0);
        assert_eq!(c.image, BaseImage::Debian12);
        assert_eq!(c.services.len(), 2);
        assert_eq!(c.created_at.len(), "2024-01-15".len());
    }

    #[test]
    fn ids_are_unique_and_not_reused() {
        let mut reg = registry();
        let a = reg.create(CreateContainerData::new("a")).id.clone();
        let b = reg.create(CreateContainerData::new("b")).id.clone();
        assert_ne!(a, b);
        let _ = reg.delete(&b).unwrap();
        let c = reg.create(CreateContainerData::new("c")).id.clone();
        assert_ne!(c, b);
        assert_ne!(c, a);
    }

    #[test]
    fn duplicate_names_are_admitted() {
        let mut reg = registry();
        let _ = reg.create(CreateContainerData::new("twin"));
        let _ = reg.create(CreateContainerData::new("twin"));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.list()[0].domain, reg.list()[1].domain);
    }

    #[test]
    fn start_uses_metrics_source() {
        let mut reg = registry();
        let id = reg.create(CreateContainerData::new("a")).id.clone();
        let c = reg.start(&id).unwrap();
        assert_eq!(c.status, ContainerStatus::Running);
        assert_eq!(c.cpu, 25);
    }

    #[test]
    fn start_then_stop_zeroes_cpu() {
        let config = NuagesConfig::default();
        let mut reg = Registry::new(&config, Box::new(RandomCpu::seeded(10, 60, 3).unwrap()));
        let id = reg.create(CreateContainerData::new("a")).id.clone();
        let cpu = reg.start(&id).unwrap().cpu;
        assert!((10..60).contains(&cpu));
        let c = reg.stop(&id).unwrap();
        assert_eq!(c.status, ContainerStatus::Stopped);
        assert_eq!(c.cpu, 0);
    }

    #[test]
    fn restart_of_running_container_succeeds() {
        let mut reg = registry();
        let id = reg.create(CreateContainerData::new("a")).id.clone();
        let _ = reg.start(&id).unwrap();
        let c = reg.start(&id).unwrap();
        assert!(c.is_running());
        assert_eq!(c.uptime, "0d 0h");
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut reg = registry();
        let ghost = ContainerId::new("404");
        assert!(reg.start(&ghost).unwrap_err().is_not_found());
        assert!(reg.stop(&ghost).unwrap_err().is_not_found());
        assert!(reg.delete(&ghost).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut reg = registry();
        let id = reg.create(CreateContainerData::new("a")).id.clone();
        let _ = reg.create(CreateContainerData::new("b"));
        let removed = reg.delete(&id).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(reg.len(), 1);
        assert!(reg.get(&id).is_none());

        let _ = reg.delete(&ContainerId::new("999")).unwrap_err();
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn insert_advances_counter_past_numeric_ids() {
        let mut reg = registry();
        let mut seeded = reg.create(CreateContainerData::new("seed")).clone();
        let _ = reg.delete(&seeded.id).unwrap();
        seeded.id = ContainerId::new("41");
        reg.insert(seeded);

        let next = reg.create(CreateContainerData::new("next")).id.clone();
        assert_eq!(next.as_str(), "42");
    }

    #[test]
    fn insert_near_counter_limit_does_not_overflow() {
        let mut reg = registry();
        let mut high = reg.create(CreateContainerData::new("high")).clone();
        let _ = reg.delete(&high.id).unwrap();
        high.id = ContainerId::new((u64::MAX - 1).to_string());
        reg.insert(high);

        let at_limit = reg.create(CreateContainerData::new("at-limit")).id.clone();
        assert_eq!(at_limit.as_str(), u64::MAX.to_string());
        let wrapped = reg.create(CreateContainerData::new("wrapped")).id.clone();
        assert_eq!(wrapped.as_str(), "1");
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn insert_of_max_id_keeps_counter_and_skips_taken_ids() {
        let mut reg = registry();
        let mut top = reg.create(CreateContainerData::new("top")).clone();
        let _ = reg.delete(&top.id).unwrap();
        top.id = ContainerId::new(u64::MAX.to_string());
        reg.insert(top);

        let next = reg.create(CreateContainerData::new("next")).id.clone();
        assert_eq!(next.as_str(), "2");
        assert!(reg.get(&ContainerId::new(u64::MAX.to_string())).is_some());
    }

    #[test]
    fn custom_suffix_and_ram_total_apply() {
        let config = NuagesConfig {
            domain_suffix: "example.test".into(),
            default_ram_total_mb: 2048,
            ..NuagesConfig::default()
        };
        let mut reg = Registry::new(&config, Box::new(FixedCpu(10)));
        let c = reg.create(CreateContainerData::new("box"));
        assert_eq!(c.domain, "box.example.test");
        assert_eq!(c.ram.total, 2048);
    }
}
