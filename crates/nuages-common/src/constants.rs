//! Workspace-wide constants and defaults.

/// Domain suffix appended to a container name to form its public domain.
pub const DEFAULT_DOMAIN_SUFFIX: &str = "nuages.tikloud.re";

/// Memory allotted to a freshly created container, in megabytes.
pub const DEFAULT_RAM_TOTAL_MB: u64 = 1024;

/// Uptime string shown after every status transition.
pub const ZERO_UPTIME: &str = "0d 0h";

/// Inclusive lower bound of the synthetic CPU range used on start.
pub const DEFAULT_CPU_MIN: u8 = 10;

/// Exclusive upper bound of the synthetic CPU range used on start.
pub const DEFAULT_CPU_MAX: u8 = 60;

/// Highest CPU percentage a container can report.
pub const MAX_CPU_PERCENT: u8 = 100;

/// Number of containers listed in the dashboard's recent activity panel.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Placeholder shown in the domain preview while the name field is empty.
pub const NAME_PLACEHOLDER: &str = "your-name";

/// Message of the notification seeded into a demo session.
pub const WELCOME_MESSAGE: &str = "Welcome to Ti Kloud Réunion! Your dashboard is ready.";

/// Application name used in CLI output.
pub const APP_NAME: &str = "nuages";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "nuages";
