//! Dependency version resolution against a registry mirror
//!
//! Resolution failure is never fatal: a scaffolded project must still be
//! generatable offline, at the cost of an unpinned version specifier.

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// The slice of registry metadata we care about
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    version: String,
}

#[derive(Debug, Error)]
enum LookupError {
    #[error("registry base URL cannot be extended with path segments")]
    BadBase,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("registry returned HTTP {0}")]
    Status(reqwest::StatusCode),
}

/// Resolves package version ranges to concrete published versions
pub struct VersionResolver {
    client: reqwest::Client,
    base: Url,
}

impl VersionResolver {
    /// Create a resolver with a custom user agent
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            base,
        }
    }

    /// Create a resolver from a product config, honoring the env override
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url_str = std::env::var(config.registry_url_env())
            .unwrap_or_else(|_| config.default_registry_url().to_string());
        let base = Url::parse(&url_str)
            .with_context(|| format!("Invalid registry URL: {}", url_str))?;
        Ok(Self::new(base, config.user_agent()))
    }

    async fn lookup(&self, package: &str, range: &str) -> Result<String, LookupError> {
        let mut url = self.base.clone();
        // push() percent-encodes the slash in scoped package names
        url.path_segments_mut()
            .map_err(|_| LookupError::BadBase)?
            .pop_if_empty()
            .push(package)
            .push(range);

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(LookupError::Status(response.status()));
        }

        let metadata: PackageMetadata = response.json().await?;
        Ok(metadata.version)
    }

    /// Resolve `package@range` to a pinned caret version string. On any
    /// failure, warns once and returns the original range unchanged.
    pub async fn resolve(&self, package: &str, range: &str) -> String {
        match self.lookup(package, range).await {
            Ok(version) => format!("^{}", version),
            Err(e) => {
                println!(
                    "{} could not resolve {}@{}: {}",
                    "Warning:".yellow(),
                    package,
                    range,
                    e
                );
                range.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_registry_falls_back_to_range() {
        // Nothing listens on port 1; the connection attempt fails fast
        let base = Url::parse("http://127.0.0.1:1/").unwrap();
        let resolver = VersionResolver::new(base, "quickstack-test");
        let resolved = resolver.resolve("tailwindcss", "latest").await;
        assert_eq!(resolved, "latest");
    }

    #[tokio::test]
    async fn test_fallback_preserves_explicit_range() {
        let base = Url::parse("http://127.0.0.1:1/").unwrap();
        let resolver = VersionResolver::new(base, "quickstack-test");
        let resolved = resolver.resolve("@changesets/cli", "^2.0.0").await;
        assert_eq!(resolved, "^2.0.0");
    }
}
