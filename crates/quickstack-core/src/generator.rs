//! Delegation to the external project generator
//!
//! The generator is an opaque collaborator: it receives the target directory
//! plus flags derived from the configuration choices and produces the base
//! project, including its manifest. Its failure is fatal to the run because
//! nothing downstream is meaningful without a base project.

use crate::choices::Choices;
use crate::process::{self, RunOutcome};
use crate::product::ProductConfig;
use anyhow::Result;
use std::path::Path;

/// Project name derived from the target directory
pub fn project_name(target_dir: &Path) -> String {
    target_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "app".to_string())
}

/// Build the full generator argv for the given target and choices
pub fn generator_args<C: ProductConfig>(
    config: &C,
    target_dir: &Path,
    choices: &Choices,
) -> Vec<String> {
    let mut args: Vec<String> = config
        .generator_args()
        .iter()
        .map(|arg| arg.to_string())
        .collect();

    args.push(target_dir.display().to_string());
    args.push("--name".to_string());
    args.push(project_name(target_dir));
    args.push("--template".to_string());
    args.push(config.generator_template().to_string());
    args.push("--types".to_string());
    args.push(choices.type_checking.flag().to_string());
    for feature in &choices.features {
        args.push(feature.flag().to_string());
    }

    args
}

/// Invoke the generator and wait for it to finish
pub async fn run_generator<C: ProductConfig>(
    config: &C,
    target_dir: &Path,
    choices: &Choices,
) -> Result<()> {
    let args = generator_args(config, target_dir, choices);
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

    // The target directory may not exist yet; run from its parent
    let working_dir = target_dir
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    match process::run(config.generator_program(), &arg_refs, working_dir).await {
        RunOutcome::Success => Ok(()),
        RunOutcome::Failed(message) => {
            anyhow::bail!("Project generation failed: {}", message)
        }
    }
}
