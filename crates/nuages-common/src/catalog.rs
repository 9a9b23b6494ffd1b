//! Closed catalogs of base images and optional services.
//!
//! A container's image and services can only be chosen from these lists,
//! so membership is enforced by the type system rather than by a runtime
//! check.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NuagesError;

/// Base image a container is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BaseImage {
    /// Ubuntu 22.04 LTS.
    #[default]
    #[serde(rename = "ubuntu-22.04")]
    Ubuntu2204,
    /// Debian 12.
    #[serde(rename = "debian-12")]
    Debian12,
    /// Alpine Linux 3.18.
    #[serde(rename = "alpine-3.18")]
    Alpine318,
    /// CentOS Stream 9.
    #[serde(rename = "centos-9")]
    CentOs9,
}

impl BaseImage {
    /// Every image, in the order the creation form offers them.
    pub const ALL: [Self; 4] = [Self::Ubuntu2204, Self::Debian12, Self::Alpine318, Self::CentOs9];

    /// Catalog identifier, e.g. `debian-12`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Ubuntu2204 => "ubuntu-22.04",
            Self::Debian12 => "debian-12",
            Self::Alpine318 => "alpine-3.18",
            Self::CentOs9 => "centos-9",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Ubuntu2204 => "Ubuntu 22.04 LTS",
            Self::Debian12 => "Debian 12",
            Self::Alpine318 => "Alpine Linux 3.18",
            Self::CentOs9 => "CentOS Stream 9",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ubuntu2204 => "Latest Ubuntu with long-term support",
            Self::Debian12 => "Stable Debian release",
            Self::Alpine318 => "Lightweight security-focused distribution",
            Self::CentOs9 => "Enterprise-class Linux distribution",
        }
    }

    /// The image after this one in catalog order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|i| *i == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The image before this one in catalog order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|i| *i == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BaseImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BaseImage {
    type Err = NuagesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|image| image.id() == s)
            .ok_or_else(|| NuagesError::NotFound {
                kind: "image",
                id: s.to_string(),
            })
    }
}

/// Optional service preinstalled in a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// Nginx web server.
    Nginx,
    /// Apache HTTP Server.
    Apache,
    /// Node.js runtime.
    Nodejs,
    /// Python and pip.
    Python,
    /// PHP.
    Php,
    /// MySQL database.
    Mysql,
    /// PostgreSQL database.
    Postgresql,
    /// Redis store.
    Redis,
}

impl Service {
    /// Every service, in the order the creation form offers them.
    pub const ALL: [Self; 8] = [
        Self::Nginx,
        Self::Apache,
        Self::Nodejs,
        Self::Python,
        Self::Php,
        Self::Mysql,
        Self::Postgresql,
        Self::Redis,
    ];

    /// Catalog identifier, e.g. `postgresql`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Nginx => "nginx",
            Self::Apache => "apache",
            Self::Nodejs => "nodejs",
            Self::Python => "python",
            Self::Php => "php",
            Self::Mysql => "mysql",
            Self::Postgresql => "postgresql",
            Self::Redis => "redis",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Nginx => "Nginx",
            Self::Apache => "Apache HTTP Server",
            Self::Nodejs => "Node.js",
            Self::Python => "Python",
            Self::Php => "PHP",
            Self::Mysql => "MySQL",
            Self::Postgresql => "PostgreSQL",
            Self::Redis => "Redis",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Nginx => "High-performance web server",
            Self::Apache => "Popular web server",
            Self::Nodejs => "JavaScript runtime for server-side applications",
            Self::Python => "Python programming language and pip",
            Self::Php => "Server-side scripting language",
            Self::Mysql => "Popular database management system",
            Self::Postgresql => "Advanced open-source database",
            Self::Redis => "In-memory data structure store",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Service {
    type Err = NuagesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.id() == s)
            .ok_or_else(|| NuagesError::NotFound {
                kind: "service",
                id: s.to_string(),
            })
    }
}
