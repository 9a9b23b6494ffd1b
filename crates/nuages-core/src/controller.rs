//! Application controller.
//!
//! Owns the registry, the feed, the view coordinator, the open creation form
//! and the account settings. Every successful registry mutation made here
//! pushes exactly one notification. Lookups of absent ids are silently
//! skipped: nothing changes and nothing is announced.

use nuages_common::config::NuagesConfig;
use nuages_common::error::Result;
use nuages_common::types::{ContainerId, NotificationId, NotificationKind};
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionOutcome};
use crate::container::Container;
use crate::feed::{Notification, NotificationFeed};
use crate::form::CreationForm;
use crate::metrics::{MetricsSource, RandomCpu};
use crate::registry::Registry;
use crate::seed;
use crate::settings::AccountSettings;
use crate::summary::DashboardSummary;
use crate::validator::{self, CreateContainerData, ValidationErrors};
use crate::view::{Transition, View, ViewCoordinator, ViewSelection};

/// Serializable copy of everything the presentation layer can query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Containers in registry order.
    pub containers: Vec<Container>,
    /// Notifications in feed order.
    pub notifications: Vec<Notification>,
    /// Active view.
    pub active_view: View,
    /// Whether the creation form is open.
    pub create_form_open: bool,
    /// Dashboard totals.
    pub summary: DashboardSummary,
}

/// Root state of a dashboard session.
#[derive(Debug)]
pub struct Controller {
    registry: Registry,
    feed: NotificationFeed,
    views: ViewCoordinator,
    form: Option<CreationForm>,
    settings: AccountSettings,
}

impl Controller {
    /// Creates a controller, seeding demo data if the config asks for it.
    #[must_use]
    pub fn new(config: &NuagesConfig, metrics: Box<dyn MetricsSource>) -> Self {
        let mut controller = Self {
            registry: Registry::new(config, metrics),
            feed: NotificationFeed::new(),
            views: ViewCoordinator::new(),
            form: None,
            settings: AccountSettings::default(),
        };
        if config.seed_demo_data {
            controller.seed_demo(config);
        }
        controller
    }

    /// Creates a controller backed by random CPU values.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured CPU range is invalid.
    pub fn from_config(config: &NuagesConfig, seed: Option<u64>) -> Result<Self> {
        let metrics = RandomCpu::from_config(config, seed)?;
        Ok(Self::new(config, Box::new(metrics)))
    }

    fn seed_demo(&mut self, config: &NuagesConfig) {
        for container in seed::demo_containers(&config.domain_suffix) {
            self.registry.insert(container);
        }
        let _ = self
            .feed
            .push(config.welcome_message.clone(), NotificationKind::Success);
        tracing::info!(containers = self.registry.len(), "demo data seeded");
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Validates a draft and admits it into the registry.
    ///
    /// # Errors
    ///
    /// Returns the field errors if the draft is invalid; nothing changes.
    pub fn create_container(
        &mut self,
        draft: CreateContainerData,
    ) -> std::result::Result<ContainerId, ValidationErrors> {
        validator::validate(&draft)?;
        Ok(self.admit(draft))
    }

    fn admit(&mut self, draft: CreateContainerData) -> ContainerId {
        let container = self.registry.create(draft);
        let id = container.id.clone();
        let message = format!("Container \"{}\" has been created successfully!", container.name);
        let _ = self.feed.push(message, NotificationKind::Success);
        id
    }

    /// Submits the open creation form.
    ///
    /// On success the container is created and the form closes. On failure
    /// the form stays open with its errors. Without an open form this is
    /// skipped.
    pub fn submit_create_form(&mut self) -> ActionOutcome {
        let Some(form) = self.form.as_mut() else {
            tracing::debug!("submit skipped: creation form is closed");
            return ActionOutcome::Skipped;
        };
        match form.submit() {
            Ok(draft) => {
                self.form = None;
                let _ = self.admit(draft);
                ActionOutcome::Applied
            }
            Err(errors) => ActionOutcome::Rejected(errors),
        }
    }

    /// Starts a container.
    pub fn start_container(&mut self, id: &ContainerId) -> Option<&Container> {
        let container = match self.registry.start(id) {
            Ok(container) => container,
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "start skipped");
                return None;
            }
        };
        let message = format!("Container \"{}\" is now running.", container.name);
        let _ = self.feed.push(message, NotificationKind::Success);
        Some(container)
    }

    /// Stops a container.
    pub fn stop_container(&mut self, id: &ContainerId) -> Option<&Container> {
        let container = match self.registry.stop(id) {
            Ok(container) => container,
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "stop skipped");
                return None;
            }
        };
        let message = format!("Container \"{}\" has been stopped.", container.name);
        let _ = self.feed.push(message, NotificationKind::Info);
        Some(container)
    }

    /// Deletes a container and returns it.
    pub fn delete_container(&mut self, id: &ContainerId) -> Option<Container> {
        let container = match self.registry.delete(id) {
            Ok(container) => container,
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "delete skipped");
                return None;
            }
        };
        let message = format!("Container \"{}\" has been deleted.", container.name);
        let _ = self.feed.push(message, NotificationKind::Warning);
        Some(container)
    }

    /// Dismisses a notification. Returns `true` if one was removed.
    pub fn dismiss_notification(&mut self, id: &NotificationId) -> bool {
        self.feed.dismiss(id).is_some()
    }

    /// Navigates. Selecting `create` opens the creation form over the
    /// container list.
    pub fn change_view(&mut self, selection: ViewSelection) {
        if self.views.select(selection) == Transition::OpenCreateForm {
            self.open_create_form();
        }
    }

    /// Opens the creation form. An already open form keeps its draft.
    pub fn open_create_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(CreationForm::new());
            tracing::debug!("creation form opened");
        }
    }

    /// Closes the creation form, discarding its draft. Returns `true` if a
    /// form was open.
    pub fn close_create_form(&mut self) -> bool {
        let was_open = self.form.is_some();
        self.form = None;
        if was_open {
            tracing::debug!("creation form closed");
        }
        was_open
    }

    /// Applies one serialized action.
    pub fn dispatch(&mut self, action: Action) -> ActionOutcome {
        tracing::debug!(?action, "dispatching action");
        match action {
            Action::Create {
                name,
                image,
                services,
            } => {
                let draft = CreateContainerData {
                    name,
                    image,
                    services,
                };
                match self.create_container(draft) {
                    Ok(_) => ActionOutcome::Applied,
                    Err(errors) => ActionOutcome::Rejected(errors),
                }
            }
            Action::Start { id } => applied_if(self.start_container(&id).is_some()),
            Action::Stop { id } => applied_if(self.stop_container(&id).is_some()),
            Action::Delete { id } => applied_if(self.delete_container(&id).is_some()),
            Action::Dismiss { id } => applied_if(self.dismiss_notification(&id)),
            Action::ChangeView { view } => {
                self.change_view(view);
                ActionOutcome::Applied
            }
            Action::OpenForm => {
                self.open_create_form();
                ActionOutcome::Applied
            }
            Action::CloseForm => applied_if(self.close_create_form()),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Containers in registry order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        self.registry.list()
    }

    /// Looks up a container.
    #[must_use]
    pub fn container(&self, id: &ContainerId) -> Option<&Container> {
        self.registry.get(id)
    }

    /// Notifications in feed order.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        self.feed.as_slice()
    }

    /// The notification feed.
    #[must_use]
    pub const fn feed(&self) -> &NotificationFeed {
        &self.feed
    }

    /// Active view.
    #[must_use]
    pub const fn active_view(&self) -> View {
        self.views.active()
    }

    /// Whether the creation form is open.
    #[must_use]
    pub const fn is_create_form_open(&self) -> bool {
        self.form.is_some()
    }

    /// The open creation form.
    #[must_use]
    pub const fn create_form(&self) -> Option<&CreationForm> {
        self.form.as_ref()
    }

    /// The open creation form, for editing the draft.
    pub const fn create_form_mut(&mut self) -> Option<&mut CreationForm> {
        self.form.as_mut()
    }

    /// Account settings.
    #[must_use]
    pub const fn settings(&self) -> &AccountSettings {
        &self.settings
    }

    /// Account settings, for editing.
    pub const fn settings_mut(&mut self) -> &mut AccountSettings {
        &mut self.settings
    }

    /// Domain suffix for new containers.
    #[must_use]
    pub fn domain_suffix(&self) -> &str {
        self.registry.domain_suffix()
    }

    /// Dashboard totals.
    #[must_use]
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary::from_containers(self.registry.list())
    }

    /// Copy of all queryable state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            containers: self.registry.list().to_vec(),
            notifications: self.feed.as_slice().to_vec(),
            active_view: self.active_view(),
            create_form_open: self.is_create_form_open(),
            summary: self.summary(),
        }
    }
}

const fn applied_if(applied: bool) -> ActionOutcome {
    if applied {
        ActionOutcome::Applied
    } else {
        ActionOutcome::Skipped
    }
}

#[cfg(test)]
mod tests {
    use nuages_common::catalog::{BaseImage, Service};
    use nuages_common::types::ContainerStatus;

    use super::*;
    use crate::metrics::FixedCpu;

    fn empty() -> Controller {
        let config = NuagesConfig {
            seed_demo_data: false,
            ..NuagesConfig::default()
        };
        Controller::new(&config, Box::new(FixedCpu(30)))
    }

    #[test]
    fn seeded_controller_has_demo_state() {
        let c = Controller::new(&NuagesConfig::default(), Box::new(FixedCpu(30)));
        assert_eq!(c.containers().len(), 2);
        assert_eq!(c.notifications().len(), 1);
        assert_eq!(c.notifications()[0].kind, NotificationKind::Success);
        assert_eq!(c.active_view(), View::Dashboard);
        assert!(!c.is_create_form_open());
    }

    #[test]
    fn seeded_ids_do_not_collide_with_new_ones() {
        let mut c = Controller::new(&NuagesConfig::default(), Box::new(FixedCpu(30)));
        let id = c.create_container(CreateContainerData::new("fresh")).unwrap();
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn create_pushes_success_notification() {
        let mut c = empty();
        let id = c.create_container(CreateContainerData::new("demo")).unwrap();
        assert_eq!(c.container(&id).unwrap().status, ContainerStatus::Stopped);
        let n = &c.notifications()[0];
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, "Container \"demo\" has been created successfully!");
    }

    #[test]
    fn invalid_create_changes_nothing() {
        let mut c = empty();
        let errors = c.create_container(CreateContainerData::new("My App")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(c.containers().is_empty());
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn lifecycle_notifications_have_expected_kinds() {
        let mut c = empty();
        let id = c.create_container(CreateContainerData::new("svc")).unwrap();
        assert_eq!(c.start_container(&id).unwrap().cpu, 30);
        assert!(c.stop_container(&id).is_some());
        assert_eq!(c.delete_container(&id).unwrap().name, "svc");

        let kinds: Vec<NotificationKind> = c.notifications().iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            [
                NotificationKind::Success,
                NotificationKind::Success,
                NotificationKind::Info,
                NotificationKind::Warning,
            ]
        );
        assert_eq!(c.notifications()[1].message, "Container \"svc\" is now running.");
        assert_eq!(c.notifications()[2].message, "Container \"svc\" has been stopped.");
        assert_eq!(c.notifications()[3].message, "Container \"svc\" has been deleted.");
    }

    #[test]
    fn absent_ids_are_silently_skipped() {
        let mut c = empty();
        let ghost = ContainerId::new("ghost");
        assert!(c.start_container(&ghost).is_none());
        assert!(c.stop_container(&ghost).is_none());
        assert!(c.delete_container(&ghost).is_none());
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn dismiss_removes_one_notification() {
        let mut c = empty();
        let _ = c.create_container(CreateContainerData::new("a")).unwrap();
        let id = c.notifications()[0].id.clone();
        assert!(c.dismiss_notification(&id));
        assert!(!c.dismiss_notification(&id));
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn change_view_to_create_opens_form() {
        let mut c = empty();
        c.change_view(ViewSelection::Create);
        assert!(c.is_create_form_open());
        assert_eq!(c.active_view(), View::Containers);

        c.change_view(ViewSelection::Settings);
        assert_eq!(c.active_view(), View::Settings);
    }

    #[test]
    fn reopening_form_keeps_draft() {
        let mut c = empty();
        c.open_create_form();
        c.create_form_mut().unwrap().set_name("keep");
        c.change_view(ViewSelection::Create);
        assert_eq!(c.create_form().unwrap().draft().name, "keep");
    }

    #[test]
    fn closing_form_discards_draft() {
        let mut c = empty();
        c.open_create_form();
        c.create_form_mut().unwrap().set_name("gone");
        assert!(c.close_create_form());
        assert!(!c.close_create_form());
        c.open_create_form();
        assert_eq!(c.create_form().unwrap().draft().name, "");
    }

    #[test]
    fn submit_form_success_creates_and_closes() {
        let mut c = empty();
        c.open_create_form();
        {
            let form = c.create_form_mut().unwrap();
            form.set_name("blog");
            form.set_image(BaseImage::Alpine318);
            let _ = form.toggle_service(Service::Php);
        }
        assert_eq!(c.submit_create_form(), ActionOutcome::Applied);
        assert!(!c.is_create_form_open());
        let created = &c.containers()[0];
        assert_eq!(created.image, BaseImage::Alpine318);
        assert!(created.services.contains(&Service::Php));
        assert_eq!(c.notifications().len(), 1);
    }

    #[test]
    fn submit_form_failure_keeps_form_open() {
        let mut c = empty();
        c.open_create_form();
        let outcome = c.submit_create_form();
        assert!(matches!(outcome, ActionOutcome::Rejected(_)));
        assert!(c.is_create_form_open());
        assert!(c.create_form().unwrap().name_error().is_some());
        assert!(c.containers().is_empty());
        assert!(c.notifications().is_empty());
    }

    #[test]
    fn submit_without_form_is_skipped() {
        let mut c = empty();
        assert_eq!(c.submit_create_form(), ActionOutcome::Skipped);
    }

    #[test]
    fn dispatch_maps_outcomes() {
        let mut c = empty();
        let created = c.dispatch(Action::create(CreateContainerData::new("x")));
        assert_eq!(created, ActionOutcome::Applied);
        let id = c.containers()[0].id.clone();
        assert_eq!(c.dispatch(Action::Start { id }), ActionOutcome::Applied);
        assert_eq!(
            c.dispatch(Action::Stop {
                id: ContainerId::new("nope")
            }),
            ActionOutcome::Skipped
        );
        assert!(matches!(
            c.dispatch(Action::create(CreateContainerData::new(""))),
            ActionOutcome::Rejected(_)
        ));
        assert_eq!(c.dispatch(Action::CloseForm), ActionOutcome::Skipped);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut c = empty();
        let _ = c.create_container(CreateContainerData::new("snap")).unwrap();
        c.change_view(ViewSelection::Create);
        let snap = c.snapshot();
        assert_eq!(snap.containers.len(), 1);
        assert_eq!(snap.notifications.len(), 1);
        assert_eq!(snap.active_view, View::Containers);
        assert!(snap.create_form_open);
        assert_eq!(snap.summary.total, 1);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["containers"][0]["status"], "stopped");
        assert_eq!(json["active_view"], "containers");
    }
}
