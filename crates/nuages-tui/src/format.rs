//! Human-readable formatting for memory and CPU figures.

/// Formats a megabyte count as gigabytes with one decimal (e.g., "1.5GB").
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_gb(megabytes: u64) -> String {
    format!("{:.1}GB", megabytes as f64 / 1024.0)
}

/// Formats memory usage as "used / total" in gigabytes.
#[must_use]
pub fn format_ram(used_mb: u64, total_mb: u64) -> String {
    format!("{} / {}", format_gb(used_mb), format_gb(total_mb))
}

/// Formats a percentage with one decimal.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}
