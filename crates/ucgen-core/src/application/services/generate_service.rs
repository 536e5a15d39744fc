//! Generate Service - main application orchestrator.
//!
//! This service coordinates one generation run:
//! 1. Observe the project (which files exist, registry and API client contents)
//! 2. Plan the actions (pure, see `crate::domain::plan`)
//! 3. Execute the plan through the `Filesystem` port
//!
//! The window between 1 and 3 is not locked. Files created in it by another
//! process are detected by the executor's create-new writes and reported as
//! `ConcurrentModification`; registries are read again at execution time.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::executor::{Executor, GenerationReport},
    },
    domain::{
        DomainValidator as validator, GenerationRequest, Plan, ProjectSnapshot, RegistryDocument,
        RegistryKind, TemplateKind, layout, plan,
    },
    error::UcgenResult,
};

/// Main generation service.
pub struct GenerateService {
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service over the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use ucgen_core::application::{GenerateService, ports::Filesystem};
    ///
    /// # fn demo(filesystem: Box<dyn Filesystem>) {
    /// let service = GenerateService::new(filesystem);
    /// # }
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Observe everything the planner needs to know about the project.
    #[instrument(skip_all, fields(root = %request.project_root().display()))]
    pub fn snapshot(&self, request: &GenerationRequest) -> UcgenResult<ProjectSnapshot> {
        let root = request.project_root();
        let mut snapshot = ProjectSnapshot::default();

        for kind in layout::requested_artifacts(request) {
            let Some(path) = layout::artifact_path(kind, request) else {
                continue;
            };
            if !self.filesystem.exists(&path.under(root)) {
                continue;
            }
            debug!(%path, "Already exists");
            let source = match kind {
                TemplateKind::ApiClientNew => self.filesystem.read_to_string(&path.under(root))?,
                _ => None,
            };
            if let Some(source) = source {
                snapshot.api_clients.insert(path.clone(), source);
            }
            snapshot.existing_paths.insert(path);
        }

        for registry in RegistryKind::ALL {
            let path = registry.path(&request.options().extension);
            if let Some(document) = self.read_registry(&path.under(root), registry)? {
                snapshot.existing_paths.insert(path.clone());
                snapshot.registries.insert(path, document);
            }
        }

        Ok(snapshot)
    }

    /// Plan without writing anything (dry run).
    #[instrument(skip_all, fields(request = %request))]
    pub fn preview(&self, request: &GenerationRequest) -> UcgenResult<Plan> {
        let snapshot = self.snapshot(request)?;
        let plan = plan(request, &snapshot);
        validator::validate_plan(&plan)?;
        debug!(actions = plan.len(), "Plan computed");
        Ok(plan)
    }

    /// Plan and execute.
    ///
    /// `Ok` even when individual actions failed; check
    /// [`GenerationReport::has_failures`].
    #[instrument(skip_all, fields(request = %request))]
    pub fn generate(&self, request: &GenerationRequest) -> UcgenResult<GenerationReport> {
        let plan = self.preview(request)?;
        let report = Executor::new(self.filesystem.as_ref()).execute(&plan);

        if report.has_failures() {
            warn!(failed = report.failures().count(), "Generation finished with failures");
        } else {
            info!(
                created = report.created(),
                skipped = report.skipped(),
                patched = report.patched(),
                "Generation completed successfully"
            );
        }
        Ok(report)
    }

    /// Parse one registry of the project at `root`, if it exists.
    #[instrument(skip(self))]
    pub fn inspect_registry(
        &self,
        root: &Path,
        kind: RegistryKind,
        extension: &str,
    ) -> UcgenResult<Option<RegistryDocument>> {
        let path = kind.path(extension).under(root);
        self.read_registry(&path, kind)
    }

    fn read_registry(&self, path: &Path, kind: RegistryKind) -> UcgenResult<Option<RegistryDocument>> {
        let Some(text) = self.filesystem.read_to_string(path)? else {
            return Ok(None);
        };
        let document = kind.parse(&text);
        for issue in document.issues() {
            warn!(path = %path.display(), %issue, "Registry needs attention");
        }
        Ok(Some(document))
    }
}
