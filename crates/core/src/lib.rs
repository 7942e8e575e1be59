pub mod history;
pub mod layout;
pub mod locator;
pub mod params;
pub mod prefs;
pub mod rewrite;
pub mod session;

pub use layout::LayoutPlan;
pub use locator::SourceLocator;
pub use params::SessionParams;
pub use session::ViewerSession;
