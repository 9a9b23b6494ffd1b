//! Synthetic resource metrics.
//!
//! The registry asks a [`MetricsSource`] for a CPU value whenever a container
//! starts. The default source draws uniformly from a configured range; a real
//! measurement backend can be plugged in behind the same trait.

use std::fmt;

use nuages_common::config::NuagesConfig;
use nuages_common::constants::MAX_CPU_PERCENT;
use nuages_common::error::{NuagesError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::container::Container;

/// Produces CPU readings for containers.
pub trait MetricsSource: fmt::Debug {
    /// Returns the CPU percentage to report for a container that just started.
    fn sample_cpu(&mut self, container: &Container) -> u8;
}

/// Uniform random CPU values in `[min, max)`.
#[derive(Debug)]
pub struct RandomCpu {
    rng: StdRng,
    min: u8,
    max: u8,
}

impl RandomCpu {
    /// Creates an entropy-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::Config`] if `min >= max` or `max > 100`.
    pub fn new(min: u8, max: u8) -> Result<Self> {
        check_range(min, max)?;
        Ok(Self {
            rng: StdRng::from_entropy(),
            min,
            max,
        })
    }

    /// Creates a deterministic source, for reproducible sessions.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::Config`] if `min >= max` or `max > 100`.
    pub fn seeded(min: u8, max: u8, seed: u64) -> Result<Self> {
        check_range(min, max)?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        })
    }

    /// Builds a source from the configured range.
    ///
    /// # Errors
    ///
    /// Returns [`NuagesError::Config`] if the configured range is invalid.
    pub fn from_config(config: &NuagesConfig, seed: Option<u64>) -> Result<Self> {
        match seed {
            Some(seed) => Self::seeded(config.cpu_min, config.cpu_max, seed),
            None => Self::new(config.cpu_min, config.cpu_max),
        }
    }
}

impl MetricsSource for RandomCpu {
    fn sample_cpu(&mut self, container: &Container) -> u8 {
        let cpu = self.rng.gen_range(self.min..self.max);
        tracing::trace!(id = %container.id, cpu, "sampled synthetic cpu");
        cpu
    }
}

/// Always reports the same CPU value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCpu(pub u8);

impl MetricsSource for FixedCpu {
    fn sample_cpu(&mut self, _container: &Container) -> u8 {
        self.0
    }
}

fn check_range(min: u8, max: u8) -> Result<()> {
    if min >= max || max > MAX_CPU_PERCENT {
        return Err(NuagesError::Config {
            message: format!("invalid cpu range [{min}, {max})"),
        });
    }
    Ok(())
}
