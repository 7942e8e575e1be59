use std::fmt;

/// Failure surfaced by a panel adapter call.
///
/// The session treats any panel failure as a skipped update for that cycle,
/// so this only carries a message for the log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelError(String);

impl PanelError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PanelError {}

/// Adapter over the external viewer's timeline panel.
///
/// The panel itself belongs to the external viewer; hosts implement this
/// trait instead of reaching into the viewer's objects directly.
pub trait ViewerPanel {
    /// The loading indicator has been opened. Called once per fetch attempt,
    /// before the first progress update.
    fn loading_started(&mut self) -> Result<(), PanelError>;

    /// Progress update for the active fetch, as a completed fraction.
    fn loading_progress(&mut self, fraction: f64) -> Result<(), PanelError>;

    /// A trace payload arrived and is ready for the viewer to parse.
    fn load_complete(&mut self, payload: &[u8]) -> Result<(), PanelError>;
}
