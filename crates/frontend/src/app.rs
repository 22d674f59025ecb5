use crate::layout::global_context::{provide_settings_store, SettingsStore};
use crate::routes::routes::AppRoutes;
use contracts::shared::shell_config::ShellConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Settings are loaded before the shell mounts and shared via context.
    provide_settings_store(SettingsStore::with_local_storage());
    provide_context(ShellConfig::default());

    view! {
        <AppRoutes />
    }
}
