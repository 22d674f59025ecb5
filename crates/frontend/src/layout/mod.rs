pub mod center;
pub mod global_context;
pub mod left;
pub mod overlay;
pub mod viewport;

use contracts::shared::shell_config::ShellConfig;
use global_context::use_settings_store;
use left::actions::SidebarHandlers;
use leptos::prelude::*;
use overlay::Overlay;
use viewport::{use_output_target, use_viewport_mode, SidebarLayout};

/// Shell configuration from context, or the defaults when none was provided.
pub fn use_shell_config() -> ShellConfig {
    use_context::<ShellConfig>().unwrap_or_default()
}

/// Application shell with a collapsible navigation drawer.
///
/// Layout structure:
/// ```text
/// [Opener]                       (fixed, always on top)
/// +-----------+------------------------------+
/// |  Sidebar  |          Content             |   wide: content pushed by panel width
/// |  (Left)   |          (Center)            |   narrow: panel floats over Overlay
/// +-----------+------------------------------+
/// ```
///
/// Every region is derived from `Settings::side_bar_open` plus the current
/// viewport mode and output target; the shell keeps no state of its own.
/// Opener and Overlay clicks both run the same toggle.
#[component]
pub fn SidebarShell(
    /// Called after navigating to the root route from "New chat".
    #[prop(into)]
    on_new_chat: Callback<()>,
    children: Children,
) -> impl IntoView {
    let store = use_settings_store();
    let config = use_shell_config();
    let mode = use_viewport_mode(config.clone());
    let target = use_output_target();

    let layout: Signal<SidebarLayout> = Memo::new(move |_| {
        SidebarLayout::derive(store.side_bar_open(), mode.get(), target.get(), &config)
    })
    .into();

    let handlers = SidebarHandlers::new(store, use_shell_config(), on_new_chat);

    view! {
        <Overlay layout=layout handlers=handlers />

        <left::Left layout=layout>
            <left::Sidebar handlers=handlers />
        </left::Left>

        <left::Opener layout=layout handlers=handlers />

        <center::Center layout=layout>
            {children()}
        </center::Center>
    }
}
