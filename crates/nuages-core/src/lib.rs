//! # nuages-core
//!
//! In-memory model behind the Nuages dashboard.
//!
//! The [`Controller`](controller::Controller) owns every collection and is the
//! only thing that mutates them:
//! - [`Registry`](registry::Registry): simulated containers and their metrics.
//! - [`NotificationFeed`](feed::NotificationFeed): user-facing event messages.
//! - [`CreationForm`](form::CreationForm): the open creation draft and its errors.
//! - [`ViewCoordinator`](view::ViewCoordinator): which top-level view is shown.
//!
//! Every successful registry mutation made through the controller is paired
//! with exactly one notification.
//!
//! # Example
//!
//! ```rust
//! use nuages_common::catalog::{BaseImage, Service};
//! use nuages_common::config::NuagesConfig;
//! use nuages_core::controller::Controller;
//! use nuages_core::metrics::FixedCpu;
//! use nuages_core::validator::CreateContainerData;
//!
//! let config = NuagesConfig { seed_demo_data: false, ..NuagesConfig::default() };
//! let mut controller = Controller::new(&config, Box::new(FixedCpu(42)));
//!
//! let draft = CreateContainerData::new("demo")
//!     .with_image(BaseImage::Debian12)
//!     .with_service(Service::Nginx);
//! let id = controller.create_container(draft).expect("valid draft");
//! assert!(controller.start_container(&id).is_some());
//! assert_eq!(controller.notifications().len(), 2);
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod action;
pub mod container;
pub mod controller;
pub mod feed;
pub mod form;
pub mod metrics;
pub mod registry;
pub mod seed;
pub mod settings;
pub mod summary;
pub mod validator;
pub mod view;
