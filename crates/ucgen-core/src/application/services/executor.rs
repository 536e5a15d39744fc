//! Executor - applies a plan through the `Filesystem` port.
//!
//! Every action is attempted. A failing action is recorded in its own
//! [`ActionResult`] and the remaining actions still run.

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ActionKind, FileAction, Plan, RegistryKind, RelativePath, TemplateKind, api_client,
        registry::Insertion,
    },
    error::{UcgenError, UcgenResult},
};

/// What happened to one planned action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionOutcome {
    Created,
    Skipped {
        note: String,
    },
    /// The registry was written.
    Patched {
        /// The file did not exist and was created from its skeleton.
        created: bool,
        inserted: usize,
        already_present: usize,
    },
    /// Every insertion was already present; nothing was written.
    Unchanged {
        already_present: usize,
    },
    Failed {
        #[serde(serialize_with = "serialize_display")]
        error: ApplicationError,
    },
}

impl ActionOutcome {
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Outcome of one action, addressed by its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    pub path: RelativePath,
    pub action: ActionKind,
    pub outcome: ActionOutcome,
}

/// Ordered results of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    root: PathBuf,
    results: Vec<ActionResult>,
}

impl GenerationReport {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn results(&self) -> &[ActionResult] {
        &self.results
    }

    pub fn has_failures(&self) -> bool {
        self.results.iter().any(|r| r.outcome.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ActionResult> {
        self.results.iter().filter(|r| r.outcome.is_failure())
    }

    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Created))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Skipped { .. }))
    }

    pub fn patched(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Patched { .. }))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, ActionOutcome::Unchanged { .. }))
    }

    fn count(&self, pred: impl Fn(&ActionOutcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Applies plans against one filesystem.
pub struct Executor<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Executor<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    #[instrument(skip_all, fields(root = %plan.root().display(), actions = plan.len()))]
    pub fn execute(&self, plan: &Plan) -> GenerationReport {
        let root = plan.root();
        let results = plan
            .actions()
            .iter()
            .map(|action| ActionResult {
                path: action.path().clone(),
                action: action.kind(),
                outcome: self.apply(root, action),
            })
            .collect();

        GenerationReport {
            root: root.to_path_buf(),
            results,
        }
    }

    fn apply(&self, root: &Path, action: &FileAction) -> ActionOutcome {
        let target = action.path().under(root);
        let result = match action {
            FileAction::CreateFile {
                template, content, ..
            } => self.create(&target, *template, content),
            FileAction::PatchRegistry {
                registry,
                insertions,
                ..
            } => self.patch(&target, *registry, insertions),
            FileAction::ExtendApiClient {
                method, content, ..
            } => self.extend(&target, method, content),
            FileAction::Skip { template, note, .. } => {
                info!(path = %target.display(), %template, "{note}, skipping");
                Ok(ActionOutcome::Skipped { note: note.clone() })
            }
        };

        result.unwrap_or_else(|err| {
            let error = into_application_error(err, &target);
            warn!(path = %target.display(), %error, "Action failed");
            ActionOutcome::Failed { error }
        })
    }

    fn create(&self, target: &Path, template: TemplateKind, content: &str) -> UcgenResult<ActionOutcome> {
        self.ensure_parent(target)?;
        self.filesystem.write_new(target, content)?;
        info!(path = %target.display(), %template, "Created");
        Ok(ActionOutcome::Created)
    }

    fn patch(
        &self,
        target: &Path,
        registry: RegistryKind,
        insertions: &[Insertion],
    ) -> UcgenResult<ActionOutcome> {
        let original = self.filesystem.read_to_string(target)?;
        let existed = original.is_some();
        let text = original.as_deref().unwrap_or(registry.skeleton());

        let mut document = registry.parse(text);
        for issue in document.issues() {
            warn!(path = %target.display(), %issue, "Registry needs attention");
        }

        let summary = registry.apply(&mut document, insertions);
        if let Some(group) = summary.unplaced.first() {
            return Err(ApplicationError::NoInsertionPoint {
                path: target.to_path_buf(),
                target: format!("a '{group}' region"),
            }
            .into());
        }
        for group in &summary.created_groups {
            debug!(path = %target.display(), group, "Created missing registry group");
        }

        let updated = document.serialize();
        if existed && updated == text {
            debug!(path = %target.display(), "Registry already up to date");
            return Ok(ActionOutcome::Unchanged {
                already_present: summary.already_present,
            });
        }

        if existed {
            self.filesystem.write_file(target, &updated)?;
        } else {
            self.ensure_parent(target)?;
            self.filesystem.write_new(target, &updated)?;
        }
        info!(
            path = %target.display(),
            %registry,
            inserted = summary.inserted,
            already_present = summary.already_present,
            "Patched registry"
        );
        Ok(ActionOutcome::Patched {
            created: !existed,
            inserted: summary.inserted,
            already_present: summary.already_present,
        })
    }

    fn extend(&self, target: &Path, method: &str, content: &str) -> UcgenResult<ActionOutcome> {
        let Some(source) = self.filesystem.read_to_string(target)? else {
            return Err(ApplicationError::FilesystemError {
                path: target.to_path_buf(),
                reason: "removed after planning".into(),
            }
            .into());
        };
        if api_client::declares_method(&source, method) {
            debug!(path = %target.display(), method, "Method already declared");
            return Ok(ActionOutcome::Unchanged { already_present: 1 });
        }

        let updated = api_client::insert_method(&source, content).ok_or_else(|| {
            ApplicationError::NoInsertionPoint {
                path: target.to_path_buf(),
                target: format!("method '{method}'"),
            }
        })?;
        self.filesystem.write_file(target, &updated)?;
        info!(path = %target.display(), method, "Added API client method");
        Ok(ActionOutcome::Patched {
            created: false,
            inserted: 1,
            already_present: 0,
        })
    }

    fn ensure_parent(&self, target: &Path) -> UcgenResult<()> {
        match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.filesystem.create_dir_all(parent),
            _ => Ok(()),
        }
    }
}

fn into_application_error(err: UcgenError, path: &Path) -> ApplicationError {
    match err {
        UcgenError::Application(e) => e,
        other => ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    }
}

fn serialize_display<S: Serializer>(value: &ApplicationError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
