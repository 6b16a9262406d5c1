//! Configuration choices collected once per run
//!
//! Everything downstream of the prompts keys off this record. It is read-only
//! after collection, with one exception: the controller clears `install_deps`
//! when the install subprocess fails, so the final summary reflects what
//! actually happened.

use crate::extras::ExtraSpec;
use std::fmt;

/// Type-checking mode for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeChecking {
    None,
    CheckJs,
    TypeScript,
}

impl TypeChecking {
    /// Value passed to the generator's `--types` flag
    pub fn flag(&self) -> &'static str {
        match self {
            TypeChecking::None => "none",
            TypeChecking::CheckJs => "checkjs",
            TypeChecking::TypeScript => "typescript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TypeChecking::None => "none",
            TypeChecking::CheckJs => "JavaScript with JSDoc comments",
            TypeChecking::TypeScript => "TypeScript",
        }
    }

    /// Name of the base template bundle copied for this mode
    pub fn template_bundle(&self) -> &'static str {
        match self {
            TypeChecking::None => "untyped",
            TypeChecking::CheckJs | TypeChecking::TypeScript => "typed",
        }
    }
}

impl fmt::Display for TypeChecking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Optional features forwarded to the generator as boolean flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Lint,
    Format,
    BrowserTests,
    UnitTests,
}

impl Feature {
    /// All features, in prompt order
    pub const ALL: [Feature; 4] = [
        Feature::Lint,
        Feature::Format,
        Feature::BrowserTests,
        Feature::UnitTests,
    ];

    /// Generator flag enabling this feature
    pub fn flag(&self) -> &'static str {
        match self {
            Feature::Lint => "--eslint",
            Feature::Format => "--prettier",
            Feature::BrowserTests => "--playwright",
            Feature::UnitTests => "--vitest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Feature::Lint => "ESLint",
            Feature::Format => "Prettier",
            Feature::BrowserTests => "Playwright",
            Feature::UnitTests => "Vitest",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Feature::Lint => "code linting",
            Feature::Format => "code formatting",
            Feature::BrowserTests => "browser testing",
            Feature::UnitTests => "unit testing",
        }
    }
}

/// Package managers the install step knows how to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// All package managers, in prompt order; the first is the default
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
    ];

    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Arguments for the install subcommand
    pub fn install_args(&self) -> &'static [&'static str] {
        &["install"]
    }

    /// Full install command shown as a manual next step
    pub fn install_command(&self) -> String {
        format!("{} install", self.command())
    }

    /// Dev-server command shown in the next steps
    pub fn dev_command(&self) -> String {
        match self {
            PackageManager::Npm => "npm run dev -- --open".to_string(),
            PackageManager::Pnpm => "pnpm dev --open".to_string(),
            PackageManager::Yarn => "yarn dev --open".to_string(),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// The full set of answers collected by the prompt sequence
#[derive(Debug, Clone)]
pub struct Choices {
    pub type_checking: TypeChecking,
    pub features: Vec<Feature>,
    /// Selected extras, always in registry order
    pub extras: Vec<&'static ExtraSpec>,
    pub init_git: bool,
    pub package_manager: PackageManager,
    pub install_deps: bool,
}

impl Choices {
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_checking_flags() {
        assert_eq!(TypeChecking::None.flag(), "none");
        assert_eq!(TypeChecking::CheckJs.flag(), "checkjs");
        assert_eq!(TypeChecking::TypeScript.flag(), "typescript");
    }

    #[test]
    fn test_type_checking_selects_bundle() {
        assert_eq!(TypeChecking::None.template_bundle(), "untyped");
        assert_eq!(TypeChecking::CheckJs.template_bundle(), "typed");
        assert_eq!(TypeChecking::TypeScript.template_bundle(), "typed");
    }

    #[test]
    fn test_feature_flags() {
        assert_eq!(Feature::Lint.flag(), "--eslint");
        assert_eq!(Feature::Format.flag(), "--prettier");
        assert_eq!(Feature::BrowserTests.flag(), "--playwright");
        assert_eq!(Feature::UnitTests.flag(), "--vitest");
    }

    #[test]
    fn test_default_package_manager_is_npm() {
        assert_eq!(PackageManager::ALL[0], PackageManager::Npm);
    }

    #[test]
    fn test_package_manager_commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Pnpm.install_command(), "pnpm install");
        assert_eq!(PackageManager::Npm.dev_command(), "npm run dev -- --open");
        assert_eq!(PackageManager::Yarn.dev_command(), "yarn dev --open");
    }
}
