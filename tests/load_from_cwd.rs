//! Loading that starts from the current working directory.
//!
//! This file holds a single test because it moves the process working
//! directory.

use std::env;
use std::fs;

use api_keys_env::config::{get_env, load_env, try_load_env, ENV_FILENAME};
use api_keys_env::secrets::{keys, Secrets, SECRETS};
use api_keys_env::EnvError;
use tempfile::TempDir;

#[test]
fn loads_from_working_directory_ancestors() {
    let original_cwd = env::current_dir().unwrap();

    let project = TempDir::new().unwrap();
    let nested = project.path().join("app").join("bin");
    fs::create_dir_all(&nested).unwrap();
    fs::write(
        project.path().join(ENV_FILENAME),
        "TAVILY_API_KEY=from-parent\nANTHROPIC_API_KEY=sk-ant-parent\n",
    )
    .unwrap();

    let broken = TempDir::new().unwrap();
    fs::write(
        broken.path().join(ENV_FILENAME),
        "BROKEN LINE\nOPENAI_API_KEY=after-broken\n",
    )
    .unwrap();

    let vanished = TempDir::new().unwrap();
    let gone = vanished.path().join("gone");
    fs::create_dir_all(&gone).unwrap();

    temp_env::with_vars(
        [
            (keys::TAVILY_API_KEY, None::<&str>),
            (keys::OPENAI_API_KEY, None),
            (keys::ANTHROPIC_API_KEY, None),
        ],
        || {
            env::set_current_dir(&nested).unwrap();

            let secrets = Secrets::load();
            assert_eq!(secrets.tavily_api_key.as_deref(), Some("from-parent"));
            assert_eq!(secrets.anthropic_api_key.as_deref(), Some("sk-ant-parent"));
            assert_eq!(secrets.openai_api_key, None);

            assert_eq!(SECRETS.tavily_api_key.as_deref(), Some("from-parent"));
            assert_eq!(
                api_keys_env::secrets::anthropic_api_key(),
                Some("sk-ant-parent")
            );
            assert_eq!(api_keys_env::secrets::openai_api_key(), None);

            let loaded = try_load_env().unwrap().unwrap();
            assert!(loaded.ends_with(ENV_FILENAME));
            assert_eq!(
                fs::read_to_string(&loaded).unwrap(),
                fs::read_to_string(project.path().join(ENV_FILENAME)).unwrap()
            );

            env::set_current_dir(broken.path()).unwrap();
            load_env();
            assert_eq!(
                get_env(keys::OPENAI_API_KEY).as_deref(),
                Some("after-broken")
            );

            env::set_current_dir(&gone).unwrap();
            fs::remove_dir(&gone).unwrap();
            assert!(matches!(try_load_env(), Err(EnvError::CurrentDir(_))));
            load_env();
        },
    );

    env::set_current_dir(original_cwd).unwrap();
}
