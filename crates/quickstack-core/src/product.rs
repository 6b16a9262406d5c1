//! Product configuration trait for CLI binaries
//!
//! The binary crate implements this trait to define product identity, the
//! external generator invocation, and the registry/template overrides. The
//! core library stays product-agnostic.

/// Configuration trait for scaffolding CLI products
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for env vars, user agent)
    fn name(&self) -> &'static str;

    /// Human-readable display name shown in the intro
    fn display_name(&self) -> &'static str;

    /// Program used to invoke the external project generator
    fn generator_program(&self) -> &'static str;

    /// Leading arguments for the generator, before the target directory and
    /// the derived flags
    fn generator_args(&self) -> &'static [&'static str];

    /// Template identifier passed to the generator
    fn generator_template(&self) -> &'static str;

    /// Default base URL of the registry mirror used for version resolution
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable overriding the registry base URL
    fn registry_url_env(&self) -> &'static str;

    /// Environment variable overriding the template bundle directory
    fn template_dir_env(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
