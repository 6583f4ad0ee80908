//! The API keys the application reads from its environment.
//!
//! Build a [`Secrets`] once at startup with [`Secrets::load`] and pass it
//! around, or read the process-wide snapshot in [`SECRETS`].

use std::fmt;

use once_cell::sync::Lazy;

use crate::config;
use crate::error::EnvError;

pub mod keys {
    pub const TAVILY_API_KEY: &str = "TAVILY_API_KEY";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

    pub const ALL: [&str; 3] = [TAVILY_API_KEY, OPENAI_API_KEY, ANTHROPIC_API_KEY];
}

/// Loaded from `.env` and snapshotted on first access.
pub static SECRETS: Lazy<Secrets> = Lazy::new(Secrets::load);

pub fn tavily_api_key() -> Option<&'static str> {
    SECRETS.tavily_api_key.as_deref()
}

pub fn openai_api_key() -> Option<&'static str> {
    SECRETS.openai_api_key.as_deref()
}

pub fn anthropic_api_key() -> Option<&'static str> {
    SECRETS.anthropic_api_key.as_deref()
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secrets {
    pub tavily_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
}

impl Secrets {
    /// Loads the nearest `.env` file, then snapshots the keys.
    pub fn load() -> Self {
        config::load_env();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            tavily_api_key: config::get_env(keys::TAVILY_API_KEY),
            openai_api_key: config::get_env(keys::OPENAI_API_KEY),
            anthropic_api_key: config::get_env(keys::ANTHROPIC_API_KEY),
        }
    }

    /// Looks up a key by its environment name. Unknown names are `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            keys::TAVILY_API_KEY => self.tavily_api_key.as_deref(),
            keys::OPENAI_API_KEY => self.openai_api_key.as_deref(),
            keys::ANTHROPIC_API_KEY => self.anthropic_api_key.as_deref(),
            _ => None,
        }
    }

    pub fn require(&self, name: &'static str) -> Result<&str, EnvError> {
        self.get(name).ok_or(EnvError::Missing(name))
    }

    pub fn missing(&self) -> Vec<&'static str> {
        keys::ALL
            .into_iter()
            .filter(|name| self.get(name).is_none())
            .collect()
    }
}

// Values are never printed.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() {
                "<redacted>"
            } else {
                "<unset>"
            }
        }

        f.debug_struct("Secrets")
            .field("tavily_api_key", &redact(&self.tavily_api_key))
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("anthropic_api_key", &redact(&self.anthropic_api_key))
            .finish()
    }
}
