//! Loads API keys from a nearby `.env` file into the process environment and
//! exposes the ones this application cares about.

pub mod config;
pub mod error;
pub mod secrets;

pub use config::{get_env, load_env};
pub use error::EnvError;
pub use secrets::{Secrets, SECRETS};
