//! Startup configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first. Variables
//! already set in the process environment take precedence over it.

use std::path::Path;

pub const DEBUG_VAR: &str = "SEO_GLANCE_DEBUG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Raises this crate's default log level from `info` to `debug`.
    pub debug: bool,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the environment.
    pub fn load() -> Self {
        if let Err(e) = dotenv::dotenv() {
            if !e.not_found() {
                eprintln!("ignoring .env: {}", e);
            }
        }
        Self::from_env()
    }

    /// Loads variables from a specific env file, then reads the environment.
    pub fn load_from_file(path: &Path) -> Result<Self, dotenv::Error> {
        dotenv::from_path(path)?;
        Ok(Self::from_env())
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(DEBUG_VAR).map(|v| is_truthy(&v)).unwrap_or(false);
        Self { debug }
    }

    /// Default `EnvFilter` directive for this crate's own spans and events.
    pub fn crate_directive(&self) -> &'static str {
        if self.debug {
            "seo_glance=debug"
        } else {
            "seo_glance=info"
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
