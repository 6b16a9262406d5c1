//! Optional add-ons applied after the base scaffold
//!
//! Each extra is an independently initialized unit: a dev-dependency list, an
//! init subcommand run inside the project, a template bundle copied on top,
//! and a commit message for the git step. The controller iterates the table
//! uniformly, so adding an extra means adding a row here plus its bundle
//! under `templates/`.

/// One optional add-on
#[derive(Debug)]
pub struct ExtraSpec {
    /// Stable identifier used in prompts and lookups
    pub id: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Short hint shown next to the label in the multiselect
    pub hint: &'static str,
    /// Dev-dependencies added to the project manifest
    pub packages: &'static [&'static str],
    /// Init subcommand argv, run in the project directory
    pub init: &'static [&'static str],
    /// Template bundle copied after the init subcommand
    pub template: &'static str,
    /// Commit message for this extra's git commit
    pub commit_message: &'static str,
}

/// All known extras, in the fixed order their post-setup runs
pub const EXTRAS: &[ExtraSpec] = &[
    ExtraSpec {
        id: "changesets",
        label: "Changesets",
        hint: "changelog and release management",
        packages: &["@changesets/cli"],
        init: &["npx", "--yes", "changeset", "init"],
        template: "changesets",
        commit_message: "Add changesets",
    },
    ExtraSpec {
        id: "tailwindcss",
        label: "Tailwind CSS",
        hint: "utility-first CSS framework",
        packages: &["tailwindcss", "postcss", "autoprefixer"],
        init: &["npx", "--yes", "tailwindcss", "init", "-p"],
        template: "tailwind",
        commit_message: "Add tailwindcss",
    },
];

/// Look up an extra by id
pub fn find(id: &str) -> Option<&'static ExtraSpec> {
    EXTRAS.iter().find(|extra| extra.id == id)
}

/// Filter the registry down to the given ids, preserving registry order
/// regardless of the order the ids were selected in
pub fn in_registry_order(ids: &[&str]) -> Vec<&'static ExtraSpec> {
    EXTRAS
        .iter()
        .filter(|extra| ids.contains(&extra.id))
        .collect()
}
