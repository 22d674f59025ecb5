use crate::layout::global_context::use_settings_store;
use contracts::shared::settings::Settings;
use leptos::prelude::*;

/// Demo settings page: shows the raw settings object and can reset it.
#[component]
pub fn DemoSettingsPage() -> impl IntoView {
    let store = use_settings_store();

    let settings_json = move || {
        serde_json::to_string_pretty(&store.settings())
            .unwrap_or_else(|e| format!("Ошибка сериализации: {}", e))
    };

    // Keep the drawer where it is, reset everything else.
    let reset = move |_| {
        let side_bar_open = store.settings_untracked().side_bar_open;
        store.set_settings(Settings {
            side_bar_open,
            ..Settings::default()
        });
    };

    view! {
        <div class="demo-settings">
            <h2>"Настройки демо"</h2>
            <pre class="demo-settings__json">{settings_json}</pre>
            <p class="demo-settings__revision">
                "Обновлений за сессию: " {move || store.revision()}
            </p>
            <button class="button button--secondary" on:click=reset>
                "Сбросить настройки"
            </button>
        </div>
    }
}
