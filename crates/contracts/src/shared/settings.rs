//! Application settings shared between the sidebar shell and the rest of the UI.
//!
//! The settings object is owned by the host store. The shell only reads it and
//! asks for full replacements built through [`Settings::apply`], so fields it
//! does not know about survive every update.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// localStorage key used by the host settings module.
pub const SETTINGS_STORAGE_KEY: &str = "settings";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Drawer visibility.
    #[serde(default)]
    pub side_bar_open: bool,
    /// Auto-approve preference. `None` until the user touches the checkbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_approve: Option<bool>,
    /// Remaining host fields, carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Requests the shell can make against the settings object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsAction {
    ToggleSideBar,
    SetAutoApprove(bool),
}

impl Settings {
    /// Value shown by the auto-approve checkbox.
    ///
    /// The `false` default is display-only and is never written back.
    pub fn auto_approve_checked(&self) -> bool {
        self.auto_approve.unwrap_or(false)
    }

    /// Builds the replacement object for `action`: a copy of `self` with exactly
    /// one field overridden.
    pub fn apply(&self, action: SettingsAction) -> Settings {
        let mut next = self.clone();
        match action {
            SettingsAction::ToggleSideBar => next.side_bar_open = !self.side_bar_open,
            SettingsAction::SetAutoApprove(value) => next.auto_approve = Some(value),
        }
        next
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Settings> {
        serde_json::from_str(raw).context("failed to parse stored settings")
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(self).context("failed to serialize settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_toggle_is_involution() {
        let initial = Settings::default();
        let once = initial.apply(SettingsAction::ToggleSideBar);
        assert!(once.side_bar_open);
        assert_eq!(once.apply(SettingsAction::ToggleSideBar), initial);
    }

    #[test]
    fn test_toggle_from_closed_keeps_auto_approve_unset() {
        let settings = Settings {
            side_bar_open: false,
            auto_approve: None,
            ..Default::default()
        };
        let next = settings.apply(SettingsAction::ToggleSideBar);
        assert_eq!(
            next,
            Settings {
                side_bar_open: true,
                auto_approve: None,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_auto_approve_round_trip() {
        let next = Settings::default().apply(SettingsAction::SetAutoApprove(true));
        assert_eq!(next.auto_approve, Some(true));
        assert!(next.auto_approve_checked());
        assert!(!next.side_bar_open);

        let back = next.apply(SettingsAction::SetAutoApprove(false));
        assert_eq!(back.auto_approve, Some(false));
    }

    #[test]
    fn test_unset_auto_approve_displays_unchecked() {
        let settings = Settings::default();
        assert!(!settings.auto_approve_checked());
        assert_eq!(settings.auto_approve, None);
    }

    #[test]
    fn test_unknown_fields_survive_update() {
        let settings = Settings::from_json(
            r#"{"sideBarOpen":true,"theme":"dark","model":{"name":"giga"}}"#,
        )
        .unwrap();
        let next = settings.apply(SettingsAction::SetAutoApprove(true));

        let value: serde_json::Value = serde_json::from_str(&next.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "sideBarOpen": true,
                "autoApprove": true,
                "theme": "dark",
                "model": {"name": "giga"}
            })
        );
    }

    #[test]
    fn test_absent_auto_approve_is_not_serialized() {
        let json = Settings::default().to_json().unwrap();
        assert_eq!(json, r#"{"sideBarOpen":false}"#);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("failed to parse stored settings"));
    }
}
