//! Task graph overlay for the Remix flavor.
//!
//! Mutates the base project produced by the external generator: registers
//! the Remix build/dev/CSS tasks, swaps the deployment tasks for
//! stack-scoped variants, appends ignore entries, and registers the
//! pinned-runtime marker and sample scaffold. Operations run in a fixed
//! order; later operations never re-examine earlier ones.

use serde_json::json;
use tracing::{debug, info, instrument};

use crate::error::SynthError;
use crate::options::RemixProjectOptions;
use crate::project::BaseProject;
use crate::scaffold::{self, FileWriteIntent};
use crate::tasks::Task;

/// Tailwind CLI invocation shared by the three CSS tasks.
const TAILWIND_CSS_CMD: &str =
    "tailwindcss -i ./remix/styles/tailwind.css -o ./remix/app/tailwind.css";

/// Ignore entries for Remix build output and local deployment state.
const GITIGNORE_ENTRIES: &[&str] = &[
    "/remix/.cache",
    "/remix/build",
    "/remix/public/build",
    "cdk-outputs.json",
    ".env",
];

/// Apply the Remix flavor overlay to the generated base project.
///
/// The four replaced task names (`deploy`, `watch`, `hotswap`,
/// `build-hotswap`) must already exist in the base graph; a missing one
/// is an integration-contract break and fails synthesis.
///
/// # Errors
///
/// Returns `SynthError::DuplicateTask` if the base graph already defines
/// a `remix:*` task name.
/// Returns `SynthError::MissingTask` if a replaced task is absent.
#[instrument(skip_all, fields(project = %project.name))]
pub fn apply_overlay(
    project: &mut BaseProject,
    options: &RemixProjectOptions,
) -> Result<(), SynthError> {
    project.tasks.add(Task::exec(
        "remix:build",
        "npm run remix:minify:css && rm -rf remix/public/build && rm -rf remix/build && remix build",
    ))?;
    // Dev server and CSS watcher run concurrently inside one shell step;
    // process lifecycles are the shell's problem, not ours.
    project.tasks.add(Task::exec(
        "remix:dev",
        "LOCAL_DEV=true remix dev & npm run remix:watch:css",
    ))?;
    project
        .tasks
        .add(Task::exec("remix:generate:css", TAILWIND_CSS_CMD))?;
    project.tasks.add(Task::exec(
        "remix:minify:css",
        format!("{TAILWIND_CSS_CMD} --minify"),
    ))?;
    project.tasks.add(Task::exec(
        "remix:watch:css",
        format!("{TAILWIND_CSS_CMD} --watch"),
    ))?;
    debug!("registered remix tasks");

    // Deployment tasks are scoped to the project's dev stacks.
    let stacks = format!("{}-dev*", project.name);
    project.tasks.replace(Task::exec(
        "deploy",
        format!("npm run remix:build && cdk deploy --outputs-file cdk-outputs.json {stacks}"),
    ))?;
    project
        .tasks
        .replace(Task::exec("watch", format!("cdk watch {stacks}")))?;
    project
        .tasks
        .replace(Task::exec("hotswap", format!("cdk deploy --hotswap {stacks}")))?;
    project.tasks.replace(Task::exec(
        "build-hotswap",
        format!("npm run remix:build && cdk hotswap {stacks}"),
    ))?;
    debug!("replaced deployment tasks");

    for pattern in GITIGNORE_ENTRIES {
        project.add_git_ignore(*pattern);
    }

    if options.tailwind() {
        project.add_git_ignore("/remix/app/tailwind.css");
        project.add_dep("tailwindcss");
    }

    // API Gateway v2 constructs are alpha modules versioned in lockstep
    // with the CDK release.
    let cdk = options.base().cdk_version();
    project.add_dep(format!("@aws-cdk/aws-apigatewayv2-alpha@{cdk}-alpha.0"));
    project.add_dep(format!(
        "@aws-cdk/aws-apigatewayv2-integrations-alpha@{cdk}-alpha.0"
    ));

    if let Some(lint) = project.lint.as_mut() {
        lint.extends.extend([
            "@remix-run/eslint-config".to_owned(),
            "@remix-run/eslint-config/node".to_owned(),
            "plugin:import/recommended".to_owned(),
        ]);
        lint.rules
            .insert("no-duplicate-imports".to_owned(), json!(["off"]));
        lint.rules
            .insert("@typescript-eslint/indent".to_owned(), json!(["off"]));
    }

    project.add_file(FileWriteIntent::Text {
        path: ".nvmrc".into(),
        lines: vec![options.nvm_node_version().to_owned()],
    });

    if options.sample_code() {
        for intent in scaffold::sample_intents(options) {
            project.add_file(intent);
        }
    }

    info!(tasks = project.tasks.len(), "applied remix overlay");
    Ok(())
}
