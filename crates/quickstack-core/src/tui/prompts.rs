//! The interactive prompt sequence
//!
//! Cancelling any prompt aborts the whole run before a single file is
//! written; cliclack surfaces cancellation as an error that propagates out
//! through the controller.

use crate::choices::{Choices, Feature, PackageManager, TypeChecking};
use crate::extras::{self, EXTRAS};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Resolve the target directory from the CLI argument or an interactive
/// prompt. A non-empty existing directory requires explicit confirmation;
/// declining aborts the run.
pub fn select_directory(directory: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = if let Some(dir) = directory {
        let path = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            current_dir.join(dir)
        };
        cliclack::log::info(format!("Using directory: {}", path.display()))?;
        path
    } else {
        let input: String = cliclack::input("Project directory")
            .placeholder(".")
            .default_input(".")
            .interact()?;

        if input.is_empty() || input == "." {
            current_dir.clone()
        } else {
            let path = PathBuf::from(&input);
            if path.is_absolute() {
                path
            } else {
                current_dir.join(path)
            }
        }
    };

    // Validate parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.exists() && parent != Path::new("") {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    // Confirm before scaffolding into a directory that already has contents
    if path.exists() && path.is_dir() {
        if let Ok(entries) = std::fs::read_dir(&path) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!("Directory has {} existing items", count))?;

                let confirm = cliclack::confirm("Continue anyway?")
                    .initial_value(true)
                    .interact()?;

                if !confirm {
                    anyhow::bail!("Setup cancelled.");
                }
            }
        }
    }

    Ok(path)
}

/// Ask the fixed, ordered set of configuration questions. Defaults: checkjs
/// type checking, no features, no extras, git on, npm, install on.
pub fn collect_choices() -> Result<Choices> {
    let type_checking: TypeChecking = cliclack::select("Add type checking to your JavaScript?")
        .item(TypeChecking::None, "No", "plain JavaScript")
        .item(TypeChecking::CheckJs, "Yes, using JSDoc comments", "checkjs")
        .item(TypeChecking::TypeScript, "Yes, using TypeScript", "")
        .initial_value(TypeChecking::CheckJs)
        .interact()?;

    let mut feature_select = cliclack::multiselect("Select additional features").required(false);
    for feature in Feature::ALL {
        feature_select = feature_select.item(feature, feature.display_name(), feature.hint());
    }
    let features: Vec<Feature> = feature_select.interact()?;

    let mut extra_select = cliclack::multiselect("Select extras").required(false);
    for extra in EXTRAS {
        extra_select = extra_select.item(extra.id, extra.label, extra.hint);
    }
    let selected_ids: Vec<&'static str> = extra_select.interact()?;
    let extras = extras::in_registry_order(&selected_ids);

    let init_git: bool = cliclack::confirm("Initialize a git repository?")
        .initial_value(true)
        .interact()?;

    let mut manager_select = cliclack::select("Which package manager?");
    for manager in PackageManager::ALL {
        manager_select = manager_select.item(manager, manager.command(), "");
    }
    let package_manager: PackageManager = manager_select.interact()?;

    let install_deps: bool =
        cliclack::confirm(format!("Install dependencies with {}?", package_manager))
            .initial_value(true)
            .interact()?;

    Ok(Choices {
        type_checking,
        features,
        extras,
        init_git,
        package_manager,
        install_deps,
    })
}
