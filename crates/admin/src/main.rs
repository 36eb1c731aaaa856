//! Gemdesk Admin - composition root binary.

use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemdesk_admin::infrastructure::{self, config::AdminConfig};

fn main() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        load_dotenv_from_repo_root();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "gemdesk_admin=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Gemdesk Admin");

    let config = load_config().context("invalid admin configuration")?;
    let store = infrastructure::create_store(&config)?;

    dioxus::LaunchBuilder::new()
        .with_context(gemdesk_admin::ui::presentation::Services::new(store))
        .launch(gemdesk_admin::app);

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<AdminConfig, infrastructure::config::ConfigError> {
    AdminConfig::from_env()
}

// The browser has no process environment; settings are baked in at build time.
#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<AdminConfig, infrastructure::config::ConfigError> {
    AdminConfig::from_lookup(|key| {
        let value = match key {
            "GEMDESK_STORE" => option_env!("GEMDESK_STORE"),
            "FIRESTORE_PROJECT_ID" => option_env!("FIRESTORE_PROJECT_ID"),
            "FIRESTORE_DATABASE" => option_env!("FIRESTORE_DATABASE"),
            "FIRESTORE_API_KEY" => option_env!("FIRESTORE_API_KEY"),
            "FIRESTORE_EMULATOR_HOST" => option_env!("FIRESTORE_EMULATOR_HOST"),
            "FIRESTORE_BASE_URL" => option_env!("FIRESTORE_BASE_URL"),
            "GEMDESK_REQUEST_TIMEOUT_MS" => option_env!("GEMDESK_REQUEST_TIMEOUT_MS"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
