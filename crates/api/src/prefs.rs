use serde::{Deserialize, Serialize};

/// Persisted theme preference.
///
/// Reset to `Default` (light) at session start; the user can override it
/// afterward through the viewer's own settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Default,
    Dark,
}

/// Drawer visibility mode, persisted with the split descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowMode {
    OnlyMain,
    Both,
    OnlyDrawer,
}

/// One orientation of the drawer split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerSplit {
    pub size: u32,
    pub show_mode: ShowMode,
}

/// Persisted drawer split-view descriptor.
///
/// Serializes to the shape the viewer reads back:
/// `{"horizontal":{"size":0,"showMode":"OnlyMain"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerSplitState {
    pub horizontal: DrawerSplit,
}

impl DrawerSplitState {
    /// Descriptor that collapses the drawer entirely.
    pub fn collapsed() -> Self {
        Self {
            horizontal: DrawerSplit {
                size: 0,
                show_mode: ShowMode::OnlyMain,
            },
        }
    }
}
