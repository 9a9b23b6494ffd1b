//! `nuages images` — List the base images and services available.

use clap::Args;
use nuages_common::catalog::{BaseImage, Service};

use crate::output::format_table;

/// Arguments for the `images` command.
#[derive(Args, Debug)]
pub struct ImagesArgs {
    /// Only list base images.
    #[arg(long, conflicts_with = "services_only")]
    pub images_only: bool,

    /// Only list services.
    #[arg(long)]
    pub services_only: bool,
}

/// Executes the `images` command.
///
/// # Errors
///
/// Never fails today; the signature matches the other commands.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn execute(args: &ImagesArgs) -> anyhow::Result<()> {
    tracing::debug!("listing catalogs");
    let mut sections = Vec::new();
    if !args.services_only {
        sections.push(images_table());
    }
    if !args.images_only {
        sections.push(services_table());
    }
    println!("{}", sections.join("\n\n"));
    Ok(())
}

fn images_table() -> String {
    let rows: Vec<Vec<String>> = BaseImage::ALL
        .iter()
        .map(|image| {
            vec![
                image.id().to_string(),
                image.display_name().to_string(),
                image.description().to_string(),
            ]
        })
        .collect();
    format_table(&["IMAGE", "NAME", "DESCRIPTION"], &rows)
}

fn services_table() -> String {
    let rows: Vec<Vec<String>> = Service::ALL
        .iter()
        .map(|service| {
            vec![
                service.id().to_string(),
                service.display_name().to_string(),
                service.description().to_string(),
            ]
        })
        .collect();
    format_table(&["SERVICE", "NAME", "DESCRIPTION"], &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_table_lists_every_image() {
        let table = images_table();
        assert_eq!(table.lines().count(), BaseImage::ALL.len() + 1);
        assert!(table.starts_with("IMAGE"));
        assert!(table.contains("alpine-3.18"));
        assert!(table.contains("CentOS Stream 9"));
    }

    #[test]
    fn services_table_lists_every_service() {
        let table = services_table();
        assert_eq!(table.lines().count(), Service::ALL.len() + 1);
        assert!(table.contains("postgresql"));
    }
}
