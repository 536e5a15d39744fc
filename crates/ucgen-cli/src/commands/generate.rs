//! `ucgen generate`: scaffold a use case and register it.
//!
//! Flow: resolve names (prompting if needed) → build the request → preview
//! the plan → confirm → execute the previewed plan → report.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use ucgen_adapters::LocalFilesystem;
use ucgen_core::prelude::*;

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Run `ucgen generate`.
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(resolve_names(&args)?, &args, &config)?;
    debug!(%request, root = %request.project_root().display(), "Request built");

    let filesystem = LocalFilesystem::new();
    let service = GenerateService::new(Box::new(filesystem));
    let plan = service.preview(&request)?;

    if args.dry_run {
        return show_dry_run(&plan, &output);
    }

    if !output.is_json() {
        show_plan(&request, &plan, &output)?;
    }

    let ask = plan.has_changes() && !args.yes && prompt::is_interactive();
    if ask && !prompt::confirm("Apply these changes?")? {
        output.warning("Cancelled, nothing was written")?;
        return Ok(());
    }

    let report = Executor::new(&filesystem).execute(&plan);
    info!(
        created = report.created(),
        patched = report.patched(),
        failed = report.failures().count(),
        "Plan executed"
    );

    if output.is_json() {
        output.json(&report)?;
    } else {
        show_report(&report, &output)?;
    }

    if report.has_failures() {
        return Err(CliError::GenerationIncomplete {
            failed: report.failures().count(),
            total: report.results().len(),
        });
    }
    Ok(())
}

/// Positional names, after prompting for the missing ones.
struct Names {
    domain: String,
    use_case: String,
    api: String,
}

fn resolve_names(args: &GenerateArgs) -> CliResult<Names> {
    Ok(Names {
        domain: prompt::identifier_or_prompt(args.domain.clone(), "DOMAIN", "domain")?,
        use_case: prompt::identifier_or_prompt(args.use_case.clone(), "USECASE", "use case")?,
        api: prompt::identifier_or_prompt(args.api.clone(), "API", "api")?,
    })
}

/// Merge flags over config and validate everything through the builder.
fn build_request(
    names: Names,
    args: &GenerateArgs,
    config: &AppConfig,
) -> CliResult<GenerationRequest> {
    let mut builder = GenerationRequest::builder()
        .domain(names.domain)
        .use_case(names.use_case)
        .api(names.api)
        .project_root(args.root.clone().unwrap_or_else(|| PathBuf::from(".")))
        .options(config.generation_options());

    if let Some(method) = &args.method {
        builder = builder.method(method.as_str());
    }
    if let Some(prefix) = &args.api_prefix {
        builder = builder.api_prefix(prefix.as_str());
    }
    if args.entity {
        builder = builder.with_entity(true);
    }
    if args.support_files {
        builder = builder.with_support_files(true);
    }

    Ok(builder.build()?)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

/// One planned action as printed by `--dry-run --output-format json`.
#[derive(Debug, Serialize)]
struct PlannedAction<'a> {
    path: &'a RelativePath,
    action: ActionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pending: Option<usize>,
}

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    root: &'a std::path::Path,
    dry_run: bool,
    actions: Vec<PlannedAction<'a>>,
}

fn show_dry_run(plan: &Plan, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let actions = plan
            .actions()
            .iter()
            .map(|action| PlannedAction {
                path: action.path(),
                action: action.kind(),
                pending: match action {
                    FileAction::PatchRegistry { pending, .. } => Some(*pending),
                    _ => None,
                },
            })
            .collect();
        return output.json(&DryRun {
            root: plan.root(),
            dry_run: true,
            actions,
        });
    }

    output.header("Dry run, nothing will be written")?;
    show_actions(plan, output)?;
    output.print("")?;
    output.info(&format!(
        "{} to create, {} to patch, {} to skip",
        plan.count(ActionKind::Create),
        plan.count(ActionKind::Patch),
        plan.count(ActionKind::Skip),
    ))?;
    Ok(())
}

fn show_plan(request: &GenerationRequest, plan: &Plan, output: &OutputManager) -> CliResult<()> {
    output.header("Use case")?;
    output.print(&format!("  Domain:    {}", request.domain()))?;
    output.print(&format!("  Use case:  {}", request.use_case()))?;
    output.print(&format!("  API:       {}", request.api()))?;
    output.print(&format!(
        "  Endpoint:  {} {}",
        request.method(),
        request.endpoint()
    ))?;
    output.print(&format!("  Root:      {}", plan.root().display()))?;
    output.print("")?;

    output.header("Plan")?;
    show_actions(plan, output)?;
    output.print("")?;
    Ok(())
}

fn show_actions(plan: &Plan, output: &OutputManager) -> CliResult<()> {
    for action in plan.actions() {
        let path = action.path().to_string();
        match action {
            FileAction::CreateFile { .. } => output.row("create", &path, None)?,
            FileAction::PatchRegistry {
                pending, existed, ..
            } => {
                let detail = match (*existed, *pending) {
                    (false, n) => format!("new file, {n} entries"),
                    (true, 0) => "up to date".to_string(),
                    (true, n) => format!("{n} new entries"),
                };
                output.row("patch", &path, Some(&detail))?;
            }
            FileAction::ExtendApiClient { method, .. } => {
                output.row("patch", &path, Some(&format!("add {method}()")))?
            }
            FileAction::Skip { note, .. } => output.row("skip", &path, Some(note))?,
        }
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    for result in report.results() {
        let path = result.path.to_string();
        match &result.outcome {
            ActionOutcome::Created => output.row("created", &path, None)?,
            ActionOutcome::Skipped { note } => output.row("skipped", &path, Some(note))?,
            ActionOutcome::Patched { inserted, .. } => {
                output.row("patched", &path, Some(&format!("{inserted} added")))?
            }
            ActionOutcome::Unchanged { .. } => output.row("unchanged", &path, None)?,
            ActionOutcome::Failed { error } => {
                output.row("failed", &path, None)?;
                output.error(&format!("    {error}"))?;
            }
        }
    }
    output.print("")?;

    if report.has_failures() {
        return Ok(());
    }
    if report.created() == 0 && report.patched() == 0 {
        output.success("Already up to date, nothing written")?;
    } else {
        output.success(&format!(
            "Created {} files, patched {}",
            report.created(),
            report.patched()
        ))?;
    }
    Ok(())
}
