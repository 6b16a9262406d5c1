//! Scaffold controller - the linear create-project sequence
//!
//! One guarded step after another: prompt, delegate to the generator, merge
//! the manifest, copy templates, install, init git, apply extras, print the
//! summary. Prompt cancellation and generator failure abort the run; every
//! other failure degrades to a warning plus a manual next step.

use crate::choices::Choices;
use crate::extras::ExtraSpec;
use crate::generator;
use crate::manifest;
use crate::process::{self, RunOutcome};
use crate::product::ProductConfig;
use crate::registry::VersionResolver;
use crate::templates;
use crate::tui;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Local directory to use for template bundles (development use)
    pub template_dir: Option<PathBuf>,
}

/// Run the full scaffolding sequence
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: target directory, with a confirm gate when it has contents
    let project_dir = tui::select_directory(args.directory.as_deref())?;

    // Step 2: configuration choices; the single source of truth from here on
    let mut choices = tui::collect_choices()?;

    // Step 3: delegate to the external generator (fatal on failure)
    let spinner = cliclack::spinner();
    spinner.start("Generating base project...");
    match generator::run_generator(config, &project_dir, &choices).await {
        Ok(()) => {
            spinner.stop(format!("Base project created in {}", project_dir.display()));
        }
        Err(e) => {
            spinner.stop("Base project generation failed");
            return Err(e);
        }
    }

    // Step 4: resolve extra dependencies and rewrite the manifest
    apply_dependency_overlay(config, &project_dir, &choices).await?;

    // Step 5: base template bundle, typed or untyped
    let template_root = templates::template_root(config, args.template_dir.as_deref())?;
    let bundle = template_root.join(choices.type_checking.template_bundle());
    let copied = templates::copy_template(&bundle, &project_dir)?;
    cliclack::log::success(format!("Copied {} project files", copied))?;

    // Step 6: install dependencies; failure clears the flag for the summary
    if choices.install_deps {
        let spinner = cliclack::spinner();
        spinner.start(format!(
            "Installing dependencies with {}...",
            choices.package_manager
        ));
        match process::run(
            choices.package_manager.command(),
            choices.package_manager.install_args(),
            &project_dir,
        )
        .await
        {
            RunOutcome::Success => spinner.stop("Dependencies installed"),
            RunOutcome::Failed(message) => {
                spinner.stop("Dependency installation failed");
                cliclack::log::warning(format!("{}; run the install manually later", message))?;
                choices.install_deps = false;
            }
        }
    }

    // Step 7: git init, stage, first commit
    if choices.init_git {
        init_git(&project_dir).await?;
    }

    // Step 8: per-extra post-setup, fixed order, failures isolated
    for &extra in &choices.extras {
        if let Err(e) = apply_extra(extra, &template_root, &project_dir, &choices).await {
            cliclack::log::warning(format!(
                "{} setup failed: {}; finish it manually",
                extra.label, e
            ))?;
        }
    }

    // Step 9: summary and next steps
    print_summary(&project_dir, &choices)?;

    Ok(())
}

/// Resolve each selected extra's packages sequentially, build the overlay,
/// merge it into the generated manifest, and write the result back once.
async fn apply_dependency_overlay<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    choices: &Choices,
) -> Result<()> {
    let base = manifest::read_manifest(project_dir)?;
    let resolver = VersionResolver::from_config(config)?;

    let mut dev_dependencies = serde_json::Map::new();
    for extra in &choices.extras {
        for package in extra.packages {
            let version = resolver.resolve(package, "latest").await;
            dev_dependencies.insert((*package).to_string(), json!(version));
        }
    }

    let overlay = json!({
        "devDependencies": dev_dependencies,
        "scripts": {},
    });

    let merged = manifest::merge(base, overlay);
    manifest::write_manifest(project_dir, &merged)
}

/// Initialize the repository and make the first commit. Any git failure is
/// recoverable: warn once and skip the remaining git steps.
async fn init_git(project_dir: &Path) -> Result<()> {
    const STEPS: &[&[&str]] = &[
        &["init"],
        &["add", "-A"],
        &["commit", "-m", "Initial commit"],
    ];

    for args in STEPS {
        if let RunOutcome::Failed(message) = process::run("git", args, project_dir).await {
            cliclack::log::warning(format!(
                "git {} failed: {}; initialize the repository manually",
                args[0], message
            ))?;
            return Ok(());
        }
    }

    cliclack::log::success("Initialized git repository")?;
    Ok(())
}

/// One extra's post-setup: init subcommand, template bundle, then a commit
/// when git was requested. The first failure aborts this extra only.
async fn apply_extra(
    extra: &ExtraSpec,
    template_root: &Path,
    project_dir: &Path,
    choices: &Choices,
) -> Result<()> {
    let (program, init_args) = extra
        .init
        .split_first()
        .context("extra has an empty init command")?;
    if let RunOutcome::Failed(message) = process::run(program, init_args, project_dir).await {
        anyhow::bail!("init command failed: {}", message);
    }

    templates::copy_template(&template_root.join(extra.template), project_dir)?;

    if choices.init_git {
        let commit_steps: [&[&str]; 2] =
            [&["add", "-A"], &["commit", "-m", extra.commit_message]];
        for args in commit_steps {
            if let RunOutcome::Failed(message) = process::run("git", args, project_dir).await {
                anyhow::bail!("git {} failed: {}", args[0], message);
            }
        }
    }

    cliclack::log::success(format!("{} configured", extra.label))?;
    Ok(())
}

/// Ordered list of commands the user still has to run manually. The
/// dev-server command is always the final step.
pub fn next_steps(project_dir: &Path, choices: &Choices) -> Vec<String> {
    let mut steps = Vec::new();

    let current = std::env::current_dir().ok();
    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }

    if !choices.install_deps {
        steps.push(choices.package_manager.install_command());
    }

    if !choices.init_git {
        steps.push("git init && git add -A && git commit -m \"Initial commit\"".to_string());
    }

    steps.push(choices.package_manager.dev_command());
    steps
}

/// Fixed-format summary: every choice made, then the manual next steps.
fn print_summary(project_dir: &Path, choices: &Choices) -> Result<()> {
    let features = if choices.features.is_empty() {
        "none".to_string()
    } else {
        choices
            .features
            .iter()
            .map(|feature| feature.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let extras = if choices.extras.is_empty() {
        "none".to_string()
    } else {
        choices
            .extras
            .iter()
            .map(|extra| extra.label)
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!();
    println!("  {}", "Your project is ready!".green().bold());
    println!();
    println!("  Type checking: {}", choices.type_checking);
    println!("  Features: {}", features);
    println!("  Extras: {}", extras);
    println!("  Package manager: {}", choices.package_manager);
    println!(
        "  Dependencies installed: {}",
        if choices.install_deps { "yes" } else { "no" }
    );
    println!(
        "  Git repository: {}",
        if choices.init_git {
            "initialized"
        } else {
            "not initialized"
        }
    );
    println!();
    println!("  Next steps");
    println!();

    for (i, step) in next_steps(project_dir, choices).iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
