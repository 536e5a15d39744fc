//! `ucgen list`: show what the DI registries contain.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use ucgen_adapters::LocalFilesystem;
use ucgen_core::prelude::*;

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One registry as rendered by every list format.
#[derive(Debug, Serialize)]
struct RegistryListing {
    registry: RegistryKind,
    path: RelativePath,
    exists: bool,
    groups: Vec<GroupListing>,
    issues: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GroupListing {
    name: String,
    keys: Vec<String>,
}

impl RegistryListing {
    fn new(registry: RegistryKind, extension: &str, document: Option<&RegistryDocument>) -> Self {
        let groups = document
            .map(|doc| {
                doc.groups()
                    .map(|group| GroupListing {
                        name: group.name().to_string(),
                        keys: group.keys().map(str::to_string).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let issues = document
            .map(|doc| doc.issues().iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        Self {
            registry,
            path: registry.path(extension),
            exists: document.is_some(),
            groups,
            issues,
        }
    }
}

/// List the groups and keys of both registries under the root.
#[instrument(skip_all)]
pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.root.unwrap_or_else(|| PathBuf::from("."));
    let extension = &config.generate.extension;
    let service = GenerateService::new(Box::new(LocalFilesystem::new()));

    let mut listings = Vec::with_capacity(RegistryKind::ALL.len());
    for registry in RegistryKind::ALL {
        let document = service.inspect_registry(&root, registry, extension)?;
        listings.push(RegistryListing::new(registry, extension, document.as_ref()));
    }

    match args.format {
        _ if output.is_json() => output.json(&listings),
        ListFormat::Json => output.json(&listings),
        ListFormat::Table => print_table(&listings, &output),
        ListFormat::List => print_list(&listings, &output),
    }
}

fn print_table(listings: &[RegistryListing], output: &OutputManager) -> CliResult<()> {
    for listing in listings {
        output.header(&listing.path.to_string())?;
        if !listing.exists {
            output.print("  (not created yet)")?;
            output.print("")?;
            continue;
        }
        for group in &listing.groups {
            output.print(&format!("  {} ({})", group.name, group.keys.len()))?;
            for key in &group.keys {
                output.print(&format!("    {key}"))?;
            }
        }
        for issue in &listing.issues {
            output.warning(issue)?;
        }
        output.print("")?;
    }
    Ok(())
}

fn print_list(listings: &[RegistryListing], output: &OutputManager) -> CliResult<()> {
    for listing in listings {
        for group in &listing.groups {
            for key in &group.keys {
                output.print(&format!("{} {} {key}", listing.registry, group.name))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_registry_lists_nothing() {
        let listing = RegistryListing::new(RegistryKind::Symbols, "ts", None);
        assert!(!listing.exists);
        assert!(listing.groups.is_empty());
        assert_eq!(listing.path.to_string(), "src/di/symbols.ts");
    }

    #[test]
    fn skeleton_lists_empty_groups() {
        let doc = RegistryKind::Container.parse(RegistryKind::Container.skeleton());
        let listing = RegistryListing::new(RegistryKind::Container, "ts", Some(&doc));
        let names: Vec<_> = listing.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["imports", "registrations"]);
        assert!(listing.groups.iter().all(|g| g.keys.is_empty()));
        assert!(listing.issues.is_empty());
    }

    #[test]
    fn listing_serialises_registry_name() {
        let listing = RegistryListing::new(RegistryKind::Symbols, "ts", None);
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["registry"], "symbols");
        assert_eq!(json["exists"], false);
    }
}
