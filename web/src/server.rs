use booking_core::PageConfig;
use leptos::prelude::*;
use leptos::server;

/// Page behavior switches, read from the server environment.
#[server]
pub async fn load_page_config() -> Result<PageConfig, ServerFnError> {
    match PageConfig::from_env() {
        Ok(config) => {
            tracing::debug!(?config, "page config loaded");
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "invalid page config, falling back to defaults");
            Ok(PageConfig::default())
        }
    }
}
