use thiserror::Error;

/// Tagged failure from one fetch attempt.
///
/// Every failure path resolves to this value at the fetcher boundary; the
/// session inspects it and decides the UI fallback, nothing unwinds past
/// here.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Locator(#[from] traceview_core::rewrite::RewriteError),
    /// Connect or stream failure, with the last known HTTP status when the
    /// response head had already arrived.
    #[error("transport: {source} (last status: {status:?})")]
    Transport {
        source: reqwest::Error,
        status: Option<u16>,
    },
    #[error("http status {status}")]
    Status { status: u16 },
    #[error("no payload registered for drive id {id}")]
    MissingPayload { id: String },
}

impl FetchError {
    /// Last known HTTP status for this failure, when one was observed.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => *status,
            FetchError::Status { status } => Some(*status),
            _ => None,
        }
    }
}
