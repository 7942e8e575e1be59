use serde::{Deserialize, Serialize};

/// Assumed asset size (50 MB) when the transport reports no content length.
pub const DEFAULT_TOTAL_BYTES: u64 = 50_000_000;

/// Progress report for one in-flight asset retrieval.
///
/// Emitted at the transport's chunk granularity and consumed by the session
/// to update its state and drive the viewer panel's progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchProgress {
    /// Bytes received so far.
    pub loaded: u64,
    /// Total bytes expected, when the transport reports one.
    pub total: Option<u64>,
}

impl FetchProgress {
    /// Completed fraction, using [`DEFAULT_TOTAL_BYTES`] when the transport
    /// reported no length. Not clamped.
    pub fn fraction(&self) -> f64 {
        let total = match self.total {
            Some(t) if t > 0 => t,
            _ => DEFAULT_TOTAL_BYTES,
        };
        self.loaded as f64 / total as f64
    }
}
