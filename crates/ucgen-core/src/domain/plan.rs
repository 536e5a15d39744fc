//! File planner.
//!
//! [`plan`] turns a request and an observed snapshot of the project into an
//! ordered list of [`FileAction`]s. It never touches the filesystem, so two
//! calls with the same inputs give the same plan.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::api_client;
use crate::domain::layout::{artifact_path, requested_artifacts};
use crate::domain::registry::{Insertion, RegistryDocument, RegistryKind};
use crate::domain::template::{self, TemplateKind, TemplateParams};
use crate::domain::{GenerationRequest, RelativePath};

/// One planned filesystem effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    CreateFile {
        path: RelativePath,
        template: TemplateKind,
        content: String,
    },
    /// Always emitted, even when every insertion is already present.
    PatchRegistry {
        path: RelativePath,
        registry: RegistryKind,
        insertions: Vec<Insertion>,
        /// Whether the registry file was observed.
        existed: bool,
        /// Insertions not yet in the observed document.
        pending: usize,
    },
    /// Add the use case's method to an API client that already exists.
    ExtendApiClient {
        path: RelativePath,
        /// Method name, e.g. `listProducts`.
        method: String,
        /// Rendered [`TemplateKind::ApiClientMethod`] fragment.
        content: String,
    },
    Skip {
        path: RelativePath,
        template: TemplateKind,
        note: String,
    },
}

impl FileAction {
    pub fn path(&self) -> &RelativePath {
        match self {
            Self::CreateFile { path, .. }
            | Self::PatchRegistry { path, .. }
            | Self::ExtendApiClient { path, .. }
            | Self::Skip { path, .. } => path,
        }
    }

    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::CreateFile { .. } => ActionKind::Create,
            Self::PatchRegistry { .. } | Self::ExtendApiClient { .. } => ActionKind::Patch,
            Self::Skip { .. } => ActionKind::Skip,
        }
    }
}

/// Discriminant of a [`FileAction`], for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Create,
    Patch,
    Skip,
}

impl ActionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Patch => "patch",
            Self::Skip => "skip",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered actions for one request, resolved against an explicit root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    root: PathBuf,
    actions: Vec<FileAction>,
}

impl Plan {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn actions(&self) -> &[FileAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<FileAction> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind() == kind).count()
    }

    /// Whether executing the plan would write anything.
    pub fn has_changes(&self) -> bool {
        self.actions.iter().any(|action| match action {
            FileAction::CreateFile { .. } | FileAction::ExtendApiClient { .. } => true,
            FileAction::PatchRegistry { pending, .. } => *pending > 0,
            FileAction::Skip { .. } => false,
        })
    }
}

/// Observed state of a project: which paths exist, the parsed contents of
/// the registries that exist, and the text of an existing API client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub existing_paths: BTreeSet<RelativePath>,
    pub registries: BTreeMap<RelativePath, RegistryDocument>,
    pub api_clients: BTreeMap<RelativePath, String>,
}

/// Compute the actions that bring the project to the requested state.
///
/// Generated files that already exist become [`FileAction::Skip`], except
/// an API client lacking the use case's method, which gets a
/// [`FileAction::ExtendApiClient`]. Both registries always get a
/// [`FileAction::PatchRegistry`].
pub fn plan(request: &GenerationRequest, snapshot: &ProjectSnapshot) -> Plan {
    let params = TemplateParams::from_request(request);
    let existing_paths = &snapshot.existing_paths;
    let existing_registries = &snapshot.registries;
    let mut actions = Vec::new();

    for kind in requested_artifacts(request) {
        let Some(path) = artifact_path(kind, request) else {
            continue;
        };
        if kind == TemplateKind::ApiClientNew && existing_paths.contains(&path) {
            let method = params.use_case.camel();
            let declared = snapshot
                .api_clients
                .get(&path)
                .is_some_and(|source| api_client::declares_method(source, &method));
            if !declared {
                actions.push(FileAction::ExtendApiClient {
                    path,
                    method,
                    content: template::render(TemplateKind::ApiClientMethod, &params),
                });
                continue;
            }
        }
        if existing_paths.contains(&path) {
            actions.push(FileAction::Skip {
                path,
                template: kind,
                note: "already exists".into(),
            });
        } else {
            actions.push(FileAction::CreateFile {
                path,
                template: kind,
                content: template::render(kind, &params),
            });
        }
    }

    for registry in RegistryKind::ALL {
        let path = registry.path(&request.options().extension);
        let insertions = registry.insertions(&params);
        let observed = existing_registries.get(&path);
        let existed = observed.is_some() || existing_paths.contains(&path);
        let pending = registry.pending(observed, &insertions);
        actions.push(FileAction::PatchRegistry {
            path,
            registry,
            insertions,
            existed,
            pending,
        });
    }

    Plan {
        root: request.project_root().to_path_buf(),
        actions,
    }
}
