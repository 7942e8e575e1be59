pub mod panel;
pub mod prefs;
pub mod progress;

pub use panel::{PanelError, ViewerPanel};
pub use prefs::{DrawerSplit, DrawerSplitState, ShowMode, ThemePreference};
pub use progress::{DEFAULT_TOTAL_BYTES, FetchProgress};
