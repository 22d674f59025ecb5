use contracts::shared::settings::{Settings, SettingsAction, SETTINGS_STORAGE_KEY};
use leptos::prelude::*;
use web_sys::window;

/// Shared settings store, provided to the whole tree through context.
///
/// Components never mutate the settings in place: they either replace the
/// whole object with [`SettingsStore::set_settings`] or send a
/// [`SettingsAction`] through [`SettingsStore::dispatch`].
#[derive(Clone, Copy)]
pub struct SettingsStore {
    settings: RwSignal<Settings>,
    /// Number of replacements since the store was created.
    revision: RwSignal<u64>,
    persist: bool,
}

impl SettingsStore {
    /// In-memory store, nothing is written to localStorage.
    pub fn new(initial: Settings) -> Self {
        Self {
            settings: RwSignal::new(initial),
            revision: RwSignal::new(0),
            persist: false,
        }
    }

    /// Store backed by localStorage; every replacement is written back.
    pub fn with_local_storage() -> Self {
        Self {
            settings: RwSignal::new(load_settings_from_storage()),
            revision: RwSignal::new(0),
            persist: true,
        }
    }

    pub fn settings(&self) -> Settings {
        self.settings.get()
    }

    pub fn settings_untracked(&self) -> Settings {
        self.settings.get_untracked()
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub fn revision_untracked(&self) -> u64 {
        self.revision.get_untracked()
    }

    pub fn side_bar_open(&self) -> bool {
        self.settings.with(|s| s.side_bar_open)
    }

    pub fn auto_approve_checked(&self) -> bool {
        self.settings.with(|s| s.auto_approve_checked())
    }

    /// Full replace, last writer wins.
    pub fn set_settings(&self, next: Settings) {
        if self.persist {
            save_settings_to_storage(&next);
        }
        self.settings.set(next);
        self.revision.update(|n| *n += 1);
    }

    pub fn dispatch(&self, action: SettingsAction) {
        log::debug!("settings dispatch: {:?}", action);
        let next = self.settings.with_untracked(|current| current.apply(action));
        self.set_settings(next);
    }

    pub fn toggle_side_bar(&self) {
        self.dispatch(SettingsAction::ToggleSideBar);
    }

    pub fn set_auto_approve(&self, value: bool) {
        self.dispatch(SettingsAction::SetAutoApprove(value));
    }
}

pub fn provide_settings_store(store: SettingsStore) {
    provide_context(store);
}

pub fn use_settings_store() -> SettingsStore {
    use_context::<SettingsStore>()
        .expect("SettingsStore not found. Call provide_settings_store in App.")
}

fn load_settings_from_storage() -> Settings {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten());

    match raw {
        Some(raw) => Settings::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("{:#}, using defaults", err);
            Settings::default()
        }),
        None => Settings::default(),
    }
}

fn save_settings_to_storage(settings: &Settings) {
    let json = match settings.to_json() {
        Ok(json) => json,
        Err(err) => {
            log::warn!("{:#}", err);
            return;
        }
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_STORAGE_KEY, &json);
    }
}
