//! Sidebar click handlers and the host seams they go through.

use crate::layout::global_context::SettingsStore;
use contracts::shared::shell_config::ShellConfig;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Route navigation.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

/// Browser primitives used by the sidebar.
pub trait HostEnv {
    fn print(&self);
    fn open_new_tab(&self, url: &str);
}

/// Event that can be kept from bubbling to parent handlers.
pub trait StopPropagation {
    fn stop(&self);
}

impl StopPropagation for leptos::ev::MouseEvent {
    fn stop(&self) {
        self.stop_propagation();
    }
}

/// Adapter over the closure returned by `leptos_router::hooks::use_navigate`.
#[derive(Clone)]
pub struct RouterNavigate<F>(pub F);

impl<F> Navigate for RouterNavigate<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.0)(path, NavigateOptions::default());
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl HostEnv for BrowserHost {
    fn print(&self) {
        if let Some(w) = web_sys::window() {
            let _ = w.print();
        }
    }

    fn open_new_tab(&self, url: &str) {
        if let Some(w) = web_sys::window() {
            let _ = w.open_with_url_and_target(url, "_blank");
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    NewChat,
    Print,
    OpenSettings,
}

impl NavAction {
    pub fn all() -> [NavAction; 3] {
        [NavAction::NewChat, NavAction::Print, NavAction::OpenSettings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavAction::NewChat => "Новый чат",
            NavAction::Print => "Печать",
            NavAction::OpenSettings => "Настройки демо",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NavAction::NewChat => "plus",
            NavAction::Print => "printer",
            NavAction::OpenSettings => "settings",
        }
    }
}

/// Runs a menu action. None of them touch settings.
///
/// `NewChat` navigates to the root route first and only then calls `on_new_chat`.
pub fn run_nav_action(
    action: NavAction,
    config: &ShellConfig,
    navigator: &impl Navigate,
    host: &impl HostEnv,
    on_new_chat: impl FnOnce(),
) {
    log::debug!("sidebar action: {:?}", action);
    match action {
        NavAction::NewChat => {
            navigator.navigate(&config.root_route);
            on_new_chat();
        }
        NavAction::Print => host.print(),
        NavAction::OpenSettings => navigator.navigate(&config.settings_route),
    }
}

/// Click and change handlers shared by the Opener, Overlay and drawer.
///
/// Every click handler stops propagation before acting.
#[derive(Clone, Copy)]
pub struct SidebarHandlers {
    store: SettingsStore,
    config: StoredValue<ShellConfig>,
    on_new_chat: Callback<()>,
}

impl SidebarHandlers {
    pub fn new(store: SettingsStore, config: ShellConfig, on_new_chat: Callback<()>) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            on_new_chat,
        }
    }

    /// Opener and Overlay click.
    pub fn toggle(&self, ev: &impl StopPropagation) {
        ev.stop();
        self.store.toggle_side_bar();
    }

    pub fn nav(
        &self,
        ev: &impl StopPropagation,
        action: NavAction,
        navigator: &impl Navigate,
        host: &impl HostEnv,
    ) {
        ev.stop();
        let on_new_chat = self.on_new_chat;
        self.config.with_value(|config| {
            run_nav_action(action, config, navigator, host, || on_new_chat.run(()))
        });
    }

    pub fn open_repository(&self, ev: &impl StopPropagation, host: &impl HostEnv) {
        ev.stop();
        self.config.with_value(|config| host.open_new_tab(&config.github_url));
    }

    /// One write per change event.
    pub fn auto_approve_changed(&self, checked: bool) {
        self.store.set_auto_approve(checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::settings::Settings;
    use std::cell::Cell;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Navigate(String),
        Print,
        OpenTab(String),
        NewChat,
    }

    #[derive(Clone, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl Recorder {
        fn push(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Navigate for Recorder {
        fn navigate(&self, path: &str) {
            self.push(Call::Navigate(path.to_string()));
        }
    }

    impl HostEnv for Recorder {
        fn print(&self) {
            self.push(Call::Print);
        }

        fn open_new_tab(&self, url: &str) {
            self.push(Call::OpenTab(url.to_string()));
        }
    }

    #[derive(Default)]
    struct Click {
        stopped: Cell<u32>,
    }

    impl StopPropagation for Click {
        fn stop(&self) {
            self.stopped.set(self.stopped.get() + 1);
        }
    }

    fn setup(initial: Settings, recorder: &Recorder) -> (SettingsStore, SidebarHandlers) {
        let store = SettingsStore::new(initial);
        let on_new_chat = {
            let recorder = recorder.clone();
            Callback::new(move |_: ()| recorder.push(Call::NewChat))
        };
        let handlers = SidebarHandlers::new(store, ShellConfig::default(), on_new_chat);
        (store, handlers)
    }

    #[test]
    fn test_new_chat_navigates_before_callback() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let (_, handlers) = setup(Settings::default(), &recorder);
            handlers.nav(&Click::default(), NavAction::NewChat, &recorder, &recorder);
            assert_eq!(
                recorder.calls(),
                vec![Call::Navigate("/".to_string()), Call::NewChat]
            );
        });
    }

    #[test]
    fn test_print_requests_exactly_one_print_and_keeps_settings() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let initial = Settings {
                side_bar_open: true,
                ..Default::default()
            };
            let (store, handlers) = setup(initial.clone(), &recorder);
            handlers.nav(&Click::default(), NavAction::Print, &recorder, &recorder);
            assert_eq!(recorder.calls(), vec![Call::Print]);
            assert_eq!(store.settings_untracked(), initial);
            assert_eq!(store.revision_untracked(), 0);
        });
    }

    #[test]
    fn test_open_settings_navigates_to_demo_settings() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let (_, handlers) = setup(Settings::default(), &recorder);
            handlers.nav(&Click::default(), NavAction::OpenSettings, &recorder, &recorder);
            assert_eq!(
                recorder.calls(),
                vec![Call::Navigate("/demo/settings".to_string())]
            );
        });
    }

    #[test]
    fn test_nav_actions_stop_propagation_and_never_touch_side_bar() {
        Owner::new().with(|| {
            for open in [false, true] {
                let recorder = Recorder::default();
                let initial = Settings {
                    side_bar_open: open,
                    ..Default::default()
                };
                let (store, handlers) = setup(initial.clone(), &recorder);
                for action in NavAction::all() {
                    let click = Click::default();
                    handlers.nav(&click, action, &recorder, &recorder);
                    assert_eq!(click.stopped.get(), 1, "{:?}", action);
                    assert_eq!(store.settings_untracked().side_bar_open, open);
                }
                assert_eq!(store.settings_untracked(), initial);
                assert_eq!(store.revision_untracked(), 0);
            }
        });
    }

    #[test]
    fn test_toggle_stops_propagation_and_flips_side_bar() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let (store, handlers) = setup(Settings::default(), &recorder);

            let click = Click::default();
            handlers.toggle(&click);
            assert_eq!(click.stopped.get(), 1);
            assert_eq!(
                store.settings_untracked(),
                Settings {
                    side_bar_open: true,
                    auto_approve: None,
                    ..Default::default()
                }
            );

            handlers.toggle(&Click::default());
            assert!(!store.settings_untracked().side_bar_open);
            assert_eq!(store.revision_untracked(), 2);
            assert!(recorder.calls().is_empty());
        });
    }

    #[test]
    fn test_auto_approve_change_writes_once_per_event() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let (store, handlers) = setup(Settings::default(), &recorder);
            assert!(!store.auto_approve_checked());
            assert_eq!(store.revision_untracked(), 0);

            handlers.auto_approve_changed(true);
            assert_eq!(store.settings_untracked().auto_approve, Some(true));
            assert_eq!(store.revision_untracked(), 1);

            handlers.auto_approve_changed(false);
            assert_eq!(store.settings_untracked().auto_approve, Some(false));
            assert!(!store.settings_untracked().side_bar_open);
            assert_eq!(store.revision_untracked(), 2);
        });
    }

    #[test]
    fn test_repository_tile_opens_github_in_new_tab() {
        Owner::new().with(|| {
            let recorder = Recorder::default();
            let (store, handlers) = setup(Settings::default(), &recorder);
            let click = Click::default();
            handlers.open_repository(&click, &recorder);
            assert_eq!(click.stopped.get(), 1);
            assert_eq!(
                recorder.calls(),
                vec![Call::OpenTab(
                    "https://github.com/AlexKidd727/giga-agent-ast-softpro/tree/main".to_string()
                )]
            );
            assert_eq!(store.revision_untracked(), 0);
        });
    }
}
