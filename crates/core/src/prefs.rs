use std::collections::HashMap;

use traceview_api::{DrawerSplitState, ThemePreference};

/// Key storing the viewer's theme preference.
pub const THEME_KEY: &str = "uiTheme";
/// Key storing the drawer split-view descriptor.
pub const DRAWER_KEY: &str = "inspector.drawer-split-view-state";

/// Persistence tier for a preference write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefTier {
    /// Lives for this session only.
    Session,
    /// Survives across page loads.
    Page,
}

/// String key/value store backing persisted UI preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store used by tests and native frontends.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

/// Write the startup preferences the viewer expects.
///
/// The theme is forced back to the default (light) value at the page tier;
/// the user can still override it later. The drawer descriptor collapses the
/// console drawer and is written at both tiers, since the viewer consults
/// whichever tier it finds first.
pub fn apply_startup_prefs(
    session: &mut dyn PreferenceStore,
    page: &mut dyn PreferenceStore,
) -> Result<(), serde_json::Error> {
    let theme = serde_json::to_string(&ThemePreference::Default)?;
    page.set(THEME_KEY, &theme);

    let drawer = serde_json::to_string(&DrawerSplitState::collapsed())?;
    session.set(DRAWER_KEY, &drawer);
    page.set(DRAWER_KEY, &drawer);
    Ok(())
}
