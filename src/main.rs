use api_keys_env::secrets::{keys, Secrets};

fn main() {
    tracing_subscriber::fmt::init();

    let secrets = Secrets::load();

    for key in keys::ALL {
        let configured = secrets.get(key).is_some();
        tracing::info!(key, configured, "API key");
    }

    let missing = secrets.missing();
    if !missing.is_empty() {
        tracing::warn!(?missing, "Some API keys are not configured");
    }
}
